use crate::domain::calls::{Call, Calls, Seat, Side};
use crate::errors::{ErrorCode, TournamentError};

#[test]
fn calls_are_trimmed_and_case_insensitive() {
    let calls = Calls::new("t", " gt ", "", "T").unwrap();
    assert_eq!(calls.n_call(), Call::Tichu);
    assert_eq!(calls.s_call(), Call::GrandTichu);
    assert_eq!(calls.e_call(), Call::None);
    assert_eq!(calls.w_call(), Call::Tichu);
}

#[test]
fn unknown_call_reports_seat() {
    let err = Calls::new("", "", "X", "").unwrap_err();
    assert_eq!(
        err,
        TournamentError::InvalidCall {
            call: "X".to_string(),
            seat: Seat::East,
        }
    );
    assert_eq!(err.code(), ErrorCode::InvalidCall);
}

#[test]
fn first_bad_seat_wins() {
    let err = Calls::new("gtt", "", "", "?").unwrap_err();
    assert!(matches!(
        err,
        TournamentError::InvalidCall {
            seat: Seat::North,
            ..
        }
    ));
}

#[test]
fn side_called_looks_at_both_partners() {
    let calls = Calls::new("", "GT", "T", "").unwrap();
    assert!(calls.side_called(Side::NorthSouth, Call::GrandTichu));
    assert!(!calls.side_called(Side::NorthSouth, Call::Tichu));
    assert!(calls.side_called(Side::EastWest, Call::Tichu));
    assert!(!calls.is_empty());
    assert!(Calls::none().is_empty());
}

#[test]
fn display_lists_made_calls_only() {
    let calls = Calls::new("T", "", "GT", "").unwrap();
    assert_eq!(calls.to_string(), "N(T),E(GT)");
    assert_eq!(Calls::none().to_string(), "");
}

#[test]
fn serde_uses_seat_names_and_validates() {
    let calls: Calls = serde_json::from_str(r#"{"north":"gt","west":"T"}"#).unwrap();
    assert_eq!(calls.n_call(), Call::GrandTichu);
    assert_eq!(calls.w_call(), Call::Tichu);
    assert_eq!(calls.s_call(), Call::None);

    let json = serde_json::to_value(calls).unwrap();
    assert_eq!(json["north"], "GT");
    assert_eq!(json["south"], "");

    assert!(serde_json::from_str::<Calls>(r#"{"east":"maybe"}"#).is_err());
}
