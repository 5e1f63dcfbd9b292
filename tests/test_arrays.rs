use tui_helpers::utils::arrays::move_item_to_end;

#[test]
fn moves_the_chosen_item_to_the_back() {
    let mut items = vec!["a", "b", "c", "d"];
    move_item_to_end(&mut items, 1);
    assert_eq!(items, vec!["a", "c", "d", "b"]);
}

#[test]
fn first_and_last_positions() {
    let mut items = vec![1, 2, 3];
    move_item_to_end(&mut items, 0);
    assert_eq!(items, vec![2, 3, 1]);

    let mut items = vec![1, 2, 3];
    move_item_to_end(&mut items, 2);
    assert_eq!(items, vec![1, 2, 3]);
}

#[test]
fn out_of_range_index_is_a_no_op() {
    let mut items = vec![1, 2];
    move_item_to_end(&mut items, 5);
    assert_eq!(items, vec![1, 2]);
}
