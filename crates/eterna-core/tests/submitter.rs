//! Tests for the submission function outside the board.

mod common;

use std::cell::Cell;

use common::MockContract;
use eterna_core::{StatusMessage, WalletAddress, submit};
use tokio_test::{assert_err, assert_ok};

#[tokio::test]
async fn test_submit_reports_broadcast_before_confirmation() {
    let contract = MockContract::new();
    let identity = WalletAddress::parse("0xABC").unwrap();
    let broadcast = Cell::new(None);

    let confirmation = assert_ok!(
        submit(&contract, Some(&identity), "a verse", |pending| {
            broadcast.set(Some(pending.tx_hash()));
        })
        .await
    );

    assert_eq!(broadcast.take(), Some(confirmation.tx_hash));
    assert_eq!(confirmation.block_number, Some(1));
}

#[tokio::test]
async fn test_submit_validation_skips_broadcast() {
    let contract = MockContract::new();
    let identity = WalletAddress::parse("0xABC").unwrap();

    let status = assert_err!(submit(&contract, Some(&identity), "  ", |_| {
        panic!("nothing should be broadcast")
    })
    .await);

    assert_eq!(status, StatusMessage::EmptyPoem);
    assert_eq!(contract.write_calls(), 0);
}

#[tokio::test]
async fn test_submit_failure_skips_broadcast_callback() {
    let contract = MockContract::new();
    contract.set_fail_write(true);
    let identity = WalletAddress::parse("0xABC").unwrap();
    let mut called = false;

    let status = assert_err!(
        submit(&contract, Some(&identity), "verse", |_| called = true).await
    );

    assert_eq!(status, StatusMessage::Failed);
    assert!(!called);
}
