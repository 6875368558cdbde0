mod common;

use common::{attach_delegate, consents, init_tracing, make_adapter};
use consent_plugin_sdk::{ConsentAdapter, ModuleConfiguration};
use consent_settings::{
    InMemorySettingsStore, SettingsCallback, SharedSettingsStore, Subscription, IAB_TCF_TC_STRING,
    IAB_US_PRIVACY_STRING,
};
use consent_types::{keys, values, ConsentKey};
use pretty_assertions::assert_eq;
use publisher_cmp_adapter::{PublisherCmpAdapter, PublisherCmpConfig};
use std::sync::Arc;

const TC_STRING: &str = "CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA";

async fn initialize(adapter: &dyn ConsentAdapter) {
    adapter
        .initialize(&ModuleConfiguration::default())
        .await
        .unwrap();
}

// ── Merge ────────────────────────────────────────────────────────

#[test]
fn privacy_strings_merge_with_publisher_consents() {
    let (adapter, settings) = make_adapter(true);
    settings.set(IAB_US_PRIVACY_STRING, "1YNN");

    adapter.set_consents(consents(&[("ccpa", "granted")]));
    assert_eq!(
        adapter.consents(),
        consents(&[("usp", "1YNN"), ("ccpa", "granted")])
    );
}

#[test]
fn publisher_consents_win_on_collision() {
    let (adapter, settings) = make_adapter(true);
    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    settings.set(IAB_TCF_TC_STRING, TC_STRING);

    adapter.set_consents(consents(&[(keys::USP, "1---")]));
    assert_eq!(
        adapter.consents(),
        consents(&[(keys::USP, "1---"), (keys::TCF, TC_STRING)])
    );
    assert_eq!(adapter.store().custom_consents(), consents(&[(keys::USP, "1---")]));
}

#[test]
fn reads_track_settings_without_initialize() {
    let (adapter, settings) = make_adapter(true);
    assert!(adapter.consents().is_empty());

    settings.set(IAB_TCF_TC_STRING, TC_STRING);
    assert_eq!(adapter.consents(), consents(&[(keys::TCF, TC_STRING)]));

    settings.remove(IAB_TCF_TC_STRING);
    assert!(adapter.consents().is_empty());
}

#[test]
fn privacy_strings_ignored_when_disabled() {
    let (adapter, settings) = make_adapter(false);
    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    adapter.set_consents(consents(&[(keys::CCPA_OPT_IN, values::DENIED)]));

    assert_eq!(adapter.consents(), consents(&[(keys::CCPA_OPT_IN, values::DENIED)]));
}

#[test]
fn unrelated_settings_keys_never_appear() {
    let (adapter, settings) = make_adapter(true);
    settings.set("IABTCF_gdprApplies", "1");
    settings.set("IABGPP_HDR_GppString", "DBABMA~CPXxRfAPXxRfAAfKABENB-CgAAAAAAAAAAYgAAAAAAAA");
    assert!(adapter.consents().is_empty());
}

// ── Observation ──────────────────────────────────────────────────

#[tokio::test]
async fn settings_change_after_initialize_notifies_mapped_key() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(delegate.changes(), vec![ConsentKey::from(keys::USP)]);

    settings.set(IAB_TCF_TC_STRING, TC_STRING);
    settings.remove(IAB_US_PRIVACY_STRING);
    assert_eq!(
        delegate.changes(),
        vec![
            ConsentKey::from(keys::USP),
            ConsentKey::from(keys::TCF),
            ConsentKey::from(keys::USP),
        ]
    );
}

#[tokio::test]
async fn rewriting_same_privacy_string_notifies_nothing() {
    let (adapter, settings) = make_adapter(true);
    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(delegate.count(), 0);

    settings.set(IAB_US_PRIVACY_STRING, "1YYN");
    assert_eq!(delegate.count(), 1);
}

#[tokio::test]
async fn clearing_to_empty_string_counts_as_removal() {
    let (adapter, settings) = make_adapter(true);
    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;

    settings.set(IAB_US_PRIVACY_STRING, "");
    assert_eq!(delegate.changes(), vec![ConsentKey::from(keys::USP)]);
    assert!(adapter.consents().is_empty());

    settings.remove(IAB_US_PRIVACY_STRING);
    assert_eq!(delegate.count(), 1);
}

#[tokio::test]
async fn no_notifications_before_initialize() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(delegate.count(), 0);
    assert_eq!(settings.subscriber_count(), 0);
}

#[tokio::test]
async fn disabled_mode_never_subscribes() {
    let (adapter, settings) = make_adapter(false);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(settings.subscriber_count(), 0);
    assert_eq!(delegate.count(), 0);
}

#[tokio::test]
async fn shadowed_privacy_string_change_is_silent() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;
    adapter.set_consents(consents(&[(keys::USP, "1---")]));
    delegate.reset();

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(delegate.count(), 0);
    assert_eq!(adapter.consents(), consents(&[(keys::USP, "1---")]));

    // Once the publisher value is gone the stored string shows through.
    adapter.set_consents(Default::default());
    assert_eq!(delegate.changes(), vec![ConsentKey::from(keys::USP)]);
    assert_eq!(adapter.consents(), consents(&[(keys::USP, "1YNN")]));
}

#[tokio::test]
async fn initialize_twice_subscribes_once() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;
    initialize(&adapter).await;
    assert_eq!(settings.subscriber_count(), 1);

    settings.set(IAB_TCF_TC_STRING, TC_STRING);
    assert_eq!(delegate.count(), 1);
}

#[tokio::test]
async fn dropping_adapter_cancels_observation() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;
    assert_eq!(settings.subscriber_count(), 1);

    drop(adapter);
    assert_eq!(settings.subscriber_count(), 0);

    settings.set(IAB_US_PRIVACY_STRING, "1YNN");
    assert_eq!(delegate.count(), 0);
}

#[tokio::test]
async fn observation_from_another_thread_reaches_delegate() {
    let (adapter, settings) = make_adapter(true);
    let delegate = attach_delegate(&adapter);
    initialize(&adapter).await;

    let writer = Arc::clone(&settings);
    std::thread::spawn(move || writer.set(IAB_TCF_TC_STRING, TC_STRING))
        .join()
        .unwrap();

    assert_eq!(delegate.changes(), vec![ConsentKey::from(keys::TCF)]);
}

/// Settings store that rewrites the US privacy string while a subscription is
/// being set up, before the observer is registered.
struct RacyStore {
    inner: InMemorySettingsStore,
}

impl SharedSettingsStore for RacyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn subscribe(&self, keys: &[&str], callback: SettingsCallback) -> Subscription {
        self.inner.set(IAB_US_PRIVACY_STRING, "1YYN");
        self.inner.subscribe(keys, callback)
    }
}

#[tokio::test]
async fn write_during_subscribe_is_reported_once() {
    init_tracing();
    let store = Arc::new(RacyStore {
        inner: InMemorySettingsStore::new(),
    });
    store.inner.set(IAB_US_PRIVACY_STRING, "1YNN");
    let adapter = PublisherCmpAdapter::new(PublisherCmpConfig::new(true), store.clone());
    let delegate = attach_delegate(&adapter);

    initialize(&adapter).await;
    assert_eq!(adapter.consents(), consents(&[("usp", "1YYN")]));
    assert_eq!(delegate.changes(), vec![ConsentKey::from(keys::USP)]);

    store.inner.set(IAB_US_PRIVACY_STRING, "1YYN");
    assert_eq!(delegate.count(), 1);

    store.inner.set(IAB_US_PRIVACY_STRING, "1NNN");
    assert_eq!(delegate.count(), 2);
}
