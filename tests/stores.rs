//! Registry behavior as seen by the wallet, data-fetching and UI modules.

use std::sync::{Arc, Mutex};

use wave_stores::{AppSnapshot, AppState, StateError, Wave};

fn record<T: Clone + Send + 'static>(seen: &Arc<Mutex<Vec<T>>>) -> impl Fn(&T) + Send + Sync + 'static {
    let sink = Arc::clone(seen);
    move |value: &T| sink.lock().unwrap().push(value.clone())
}

#[test]
fn test_every_cell_starts_at_initial_value() {
    let state: AppState = AppState::new();
    assert_eq!(state.snapshot(), AppSnapshot::default());
}

#[test]
fn test_set_then_get_every_cell() {
    let state: AppState = AppState::new();
    let waves = vec![Wave::new("0x1", "hello", 10), Wave::new("0x2", "gm", 20)];

    state.wallet_enabled().set(true);
    state.current_account().set("0xABC".to_string());
    state.network_ready().set(true);
    state.waves().set(waves.clone());
    state.wave_count().set(42);

    assert!(state.wallet_enabled().get());
    assert_eq!(state.current_account().get(), "0xABC");
    assert!(state.network_ready().get());
    assert_eq!(state.waves().get(), waves);
    assert_eq!(state.wave_count().get(), 42);
}

#[test]
fn test_account_and_wallet_in_either_order() {
    let first: AppState = AppState::new();
    first.current_account().set("0xABC".to_string());
    first.wallet_enabled().set(true);

    let second: AppState = AppState::new();
    second.wallet_enabled().set(true);
    second.current_account().set("0xABC".to_string());

    for state in [first, second] {
        assert_eq!(state.current_account().get(), "0xABC");
        assert!(state.wallet_enabled().get());
    }
}

#[test]
fn test_waves_do_not_derive_count() {
    let state: AppState = AppState::new();
    state
        .waves()
        .set(vec![Wave::new("0x1", "a", 1), Wave::new("0x2", "b", 2)]);
    assert_eq!(state.wave_count().get(), 0);

    state.wave_count().set(7);
    assert_eq!(state.waves().get().len(), 2);
}

#[test]
fn test_observer_before_set_sees_new_value() {
    let state: AppState = AppState::new();
    let seen: Arc<Mutex<Vec<bool>>> = Arc::new(Mutex::new(Vec::new()));
    let _sub = state.network_ready().observe(record(&seen));

    state.network_ready().set(true);
    assert_eq!(*seen.lock().unwrap(), vec![false, true]);
}

#[test]
fn test_deregistered_observer_not_invoked() {
    let state: AppState = AppState::new();
    let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sub = state.current_account().observe(record(&seen));
    sub.unsubscribe();

    state.current_account().set("0xABC".to_string());
    assert_eq!(*seen.lock().unwrap(), vec![String::new()]);
}

#[test]
fn test_observing_one_cell_ignores_others() {
    let state: AppState = AppState::new();
    let counts: Arc<Mutex<Vec<u64>>> = Arc::new(Mutex::new(Vec::new()));
    let _sub = state.wave_count().observe(record(&counts));

    state.waves().set(vec![Wave::default()]);
    state.wallet_enabled().set(true);
    assert_eq!(*counts.lock().unwrap(), vec![0]);
}

#[test]
fn test_observers_notified_in_registration_order() {
    let state: AppState = AppState::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    let subs: Vec<_> = ["header", "list", "footer"]
        .into_iter()
        .map(|component| {
            let order = Arc::clone(&order);
            state.wave_count().observe(move |count: &u64| {
                if *count > 0 {
                    order.lock().unwrap().push(component);
                }
            })
        })
        .collect();

    state.wave_count().set(1);
    assert_eq!(*order.lock().unwrap(), vec!["header", "list", "footer"]);
    drop(subs);
}

#[test]
fn test_fetcher_updates_from_observer() {
    // A fetcher that reloads waves once the network becomes ready.
    let state: AppState = AppState::new();
    let fetcher = state.clone();
    let _sub = state.network_ready().observe(move |ready: &bool| {
        if *ready {
            fetcher.waves().set(vec![Wave::new("0x1", "hi", 5)]);
            fetcher.wave_count().set(1);
        }
    });

    assert!(state.waves().get().is_empty());
    state.network_ready().set(true);
    assert_eq!(state.waves().get().len(), 1);
    assert_eq!(state.wave_count().get(), 1);
}

#[test]
fn test_snapshot_json_round_trip() {
    let state: AppState = AppState::new();
    state.current_account().set("0xABC".to_string());
    state.waves().set(vec![Wave::new("0xABC", "gm", 1_700_000_000)]);
    state.wave_count().set(1);

    let json = state.snapshot().to_json().unwrap();
    let restored: AppState = AppState::new();
    restored.restore(&AppSnapshot::from_json(&json).unwrap());
    assert_eq!(restored.snapshot(), state.snapshot());
}

#[test]
fn test_snapshot_with_wrong_types_fails() {
    let result = AppSnapshot::<Wave>::from_json(
        r#"{"walletEnabled":"yes","currentAccount":"","networkReady":false,"waves":[],"waveCount":0}"#,
    );
    assert!(matches!(result, Err(StateError::Decode(_))));
}
