use super::*;

#[tokio::test]
async fn test_create_booking_assigns_token_position_and_quote() {
    let ctx = setup("Lunch", 2).await;

    let x = ctx.book("s1001").await;
    assert_eq!(x.token_number, "L001");
    assert_eq!(x.queue_position, 1);
    assert_eq!(x.estimated_wait_time, 5);
    assert_eq!(x.status, BookingStatus::Pending);
    assert!(x.served_at.is_none());
    assert!(x.cancelled_at.is_none());
    assert_eq!(ctx.current_bookings().await, 1);

    let y = ctx.book("s1002").await;
    assert_eq!(y.token_number, "L002");
    assert_eq!(y.queue_position, 2);
    assert_eq!(y.estimated_wait_time, 10);
    assert_eq!(ctx.current_bookings().await, 2);
}

#[tokio::test]
async fn test_create_snapshots_item_names() {
    let ctx = setup("Lunch", 5).await;
    let booking = ctx.book("s1001").await;
    assert_eq!(booking.items.len(), 1);
    assert_eq!(booking.items[0].name, "Veg Thali");
    assert_eq!(booking.items[0].quantity, 1);
}

#[tokio::test]
async fn test_create_missing_slot() {
    let ctx = setup("Lunch", 2).await;
    let err = ctx
        .manager
        .create_booking(
            "s1001",
            BookingCreate {
                slot_id: "slot:nope".into(),
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SlotNotFound);
}

#[tokio::test]
async fn test_create_unknown_menu_item() {
    let ctx = setup("Lunch", 2).await;
    let err = ctx
        .manager
        .create_booking(
            "s1001",
            BookingCreate {
                slot_id: ctx.slot_id.clone(),
                items: vec![BookingItemInput {
                    menu_item_id: "menu_item:nope".into(),
                    quantity: 1,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}

#[tokio::test]
async fn test_create_unavailable_menu_item() {
    let ctx = setup("Lunch", 2).await;
    ctx.menu
        .update(
            &ctx.item_id,
            crate::db::models::MenuItemUpdate {
                name: None,
                description: None,
                price: None,
                category: None,
                is_available: Some(false),
            },
        )
        .await
        .unwrap();

    let err = ctx
        .manager
        .create_booking(
            "s1001",
            BookingCreate {
                slot_id: ctx.slot_id.clone(),
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemUnavailable);
}

#[tokio::test]
async fn test_my_active_bookings_excludes_cancelled() {
    let ctx = setup("Lunch", 5).await;
    let a = ctx.book("s1001").await;
    ctx.book("s1001").await;
    ctx.book("s1002").await;

    let mine = ctx.manager.my_active_bookings("s1001").await.unwrap();
    assert_eq!(mine.len(), 2);

    ctx.manager
        .cancel("s1001", &a.id.unwrap().to_string())
        .await
        .unwrap();

    let mine = ctx.manager.my_active_bookings("s1001").await.unwrap();
    assert_eq!(mine.len(), 1);
}

#[tokio::test]
async fn test_modify_items_appends_history() {
    let ctx = setup("Lunch", 5).await;
    let booking = ctx.book("s1001").await;
    let id = booking.id.unwrap().to_string();

    let updated = ctx
        .manager
        .modify_items(
            "s1001",
            &id,
            crate::db::models::BookingModifyItems {
                items: vec![BookingItemInput {
                    menu_item_id: ctx.item_id.clone(),
                    quantity: 3,
                }],
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.items.len(), 1);
    assert_eq!(updated.items[0].quantity, 3);
    assert_eq!(updated.modification_history.len(), 1);
    let entry = &updated.modification_history[0];
    assert!(entry.description.contains("1x Veg Thali"));
    assert!(entry.description.contains("3x Veg Thali"));
    assert!(entry.timestamp > 0);

    // Token, position and quote are untouched by an item edit
    assert_eq!(updated.token_number, booking.token_number);
    assert_eq!(updated.queue_position, booking.queue_position);
    assert_eq!(updated.estimated_wait_time, booking.estimated_wait_time);
}

#[tokio::test]
async fn test_modify_requires_owner() {
    let ctx = setup("Lunch", 5).await;
    let booking = ctx.book("s1001").await;
    let id = booking.id.unwrap().to_string();

    let err = ctx
        .manager
        .modify_items(
            "s9999",
            &id,
            crate::db::models::BookingModifyItems {
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::NotBookingOwner);
}

#[tokio::test]
async fn test_modify_after_cancel_is_rejected() {
    let ctx = setup("Lunch", 5).await;
    let booking = ctx.book("s1001").await;
    let id = booking.id.unwrap().to_string();

    ctx.manager.cancel("s1001", &id).await.unwrap();

    let err = ctx
        .manager
        .modify_items(
            "s1001",
            &id,
            crate::db::models::BookingModifyItems {
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BookingNotPending);
}

#[tokio::test]
async fn test_modify_unknown_booking() {
    let ctx = setup("Lunch", 5).await;
    let err = ctx
        .manager
        .modify_items(
            "s1001",
            "booking:nope",
            crate::db::models::BookingModifyItems {
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BookingNotFound);
}
