use time::macros::date;

use super::*;

#[test]
fn parse_update_date_accepts_iso_days_only() {
    assert_eq!(parse_update_date("2024-11-02").unwrap(), date!(2024 - 11 - 02));
    assert_eq!(parse_update_date(" 2024-01-31 ").unwrap(), date!(2024 - 01 - 31));
    assert!(parse_update_date("2024-02-30").is_err());
    assert!(parse_update_date("02/11/2024").is_err());
    assert!(parse_update_date("").is_err());
}

#[test]
fn update_age_bands_by_days() {
    let today = date!(2025 - 06 - 30);

    let fresh = update_age(Some(date!(2025 - 06 - 01)), today).unwrap();
    assert_eq!(fresh.days, 29);
    assert_eq!(fresh.status, UpdateStatus::Fresh);

    let aging = update_age(Some(date!(2024 - 12 - 01)), today).unwrap();
    assert_eq!(aging.status, UpdateStatus::Aging);

    let stale = update_age(Some(date!(2023 - 01 - 01)), today).unwrap();
    assert_eq!(stale.status, UpdateStatus::Stale);
}

#[test]
fn update_age_handles_missing_and_future() {
    let today = date!(2025 - 06 - 30);
    assert!(update_age(None, today).is_none());
    assert_eq!(update_age(Some(date!(2025 - 07 - 15)), today).unwrap().days, 0);
}

#[test]
fn status_boundaries() {
    assert_eq!(UpdateStatus::from_days(179), UpdateStatus::Fresh);
    assert_eq!(UpdateStatus::from_days(180), UpdateStatus::Aging);
    assert_eq!(UpdateStatus::from_days(364), UpdateStatus::Aging);
    assert_eq!(UpdateStatus::from_days(365), UpdateStatus::Stale);
    assert_eq!(FRESH_DAYS, 180);
    assert_eq!(AGING_DAYS, 365);
}
