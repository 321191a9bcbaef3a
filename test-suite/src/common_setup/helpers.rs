use anyhow::Error;
use cosmwasm_std::Timestamp;
use cw_multi_test::{App, AppResponse};

pub fn setup_block_time(router: &mut App, nanos: u64, height: Option<u64>) {
    let mut block = router.block_info();
    block.time = Timestamp::from_nanos(nanos);
    if let Some(h) = height {
        block.height = h;
    }
    router.set_block(block);
}

pub fn plus_block_seconds(router: &mut App, seconds: u64) {
    let mut block = router.block_info();
    block.time = block.time.plus_seconds(seconds);
    block.height += seconds / 5;
    router.set_block(block);
}

pub fn assert_error(res: Result<AppResponse, Error>, expected: String) {
    assert_eq!(res.unwrap_err().root_cause().to_string(), expected);
}

/// For errors wrapping a reason produced by another module
pub fn assert_error_starts_with(res: Result<AppResponse, Error>, expected: &str) {
    let err = res.unwrap_err().root_cause().to_string();
    assert!(
        err.starts_with(expected),
        "expected an error starting with {expected:?}, got {err:?}"
    );
}
