use super::*;

#[tokio::test]
async fn test_capacity_exceeded_leaves_counter_unchanged() {
    let ctx = setup("Lunch", 2).await;
    ctx.book("s1001").await;
    ctx.book("s1002").await;

    let err = ctx
        .manager
        .create_booking(
            "s1003",
            BookingCreate {
                slot_id: ctx.slot_id.clone(),
                items: ctx.single_item(),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SlotCapacityExceeded);
    assert_eq!(ctx.current_bookings().await, 2);

    // The failed create must not have burned a token or a position
    ctx.assert_gap_free(2).await;
}

#[tokio::test]
async fn test_zero_capacity_slot_rejects_first_booking() {
    let ctx = setup("Lunch", 0).await;
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
    assert_eq!(err.code, ErrorCode::SlotCapacityExceeded);
    assert_eq!(ctx.current_bookings().await, 0);
}

#[tokio::test]
async fn test_create_rejects_empty_items() {
    let ctx = setup("Lunch", 2).await;
    let err = ctx
        .manager
        .create_booking(
            "s1001",
            BookingCreate {
                slot_id: ctx.slot_id.clone(),
                items: vec![],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn test_create_rejects_zero_quantity() {
    let ctx = setup("Lunch", 2).await;
    let err = ctx
        .manager
        .create_booking(
            "s1001",
            BookingCreate {
                slot_id: ctx.slot_id.clone(),
                items: vec![BookingItemInput {
                    menu_item_id: ctx.item_id.clone(),
                    quantity: 0,
                }],
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValidationFailed);
}

#[tokio::test]
async fn test_inactive_slot_rejects_bookings() {
    let ctx = setup("Lunch", 5).await;
    ctx.slots
        .update(
            &ctx.slot_id,
            crate::db::models::SlotUpdate {
                name: None,
                start_time: None,
                end_time: None,
                capacity: None,
                is_active: Some(false),
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
    assert_eq!(err.code, ErrorCode::SlotInactive);
}

#[tokio::test]
async fn test_token_sequence_skips_cancelled_numbers() {
    let ctx = setup("Lunch", 5).await;
    let x = ctx.book("s1001").await;
    assert_eq!(x.token_number, "L001");

    ctx.manager
        .cancel("s1001", &x.id.unwrap().to_string())
        .await
        .unwrap();

    // The cancelled booking keeps L001; the day sequence moves on
    let y = ctx.book("s1002").await;
    assert_eq!(y.token_number, "L002");
    // But the queue position is reassigned from 1
    assert_eq!(y.queue_position, 1);
}
