use std::path::PathBuf;

use despertar_core::domain::aggregates::{Automation, AutomationKind, Offer, ServiceCategory};
use despertar_core::domain::services::ContentTemplateService;
use despertar_core::domain::value_objects::Channel;
use despertar_core::infrastructure::persistence::{automation_store, offer_store};
use despertar_core::ports::outbound::{AutomationStore, OfferStore};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn temp_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "despertar_roundtrip_{}_{}",
        tag,
        std::process::id()
    ))
}

fn automation_strategy() -> impl Strategy<Value = Automation> {
    (
        "[A-Za-z ]{1,24}",
        0usize..4,
        any::<bool>(),
        0u32..120,
        0u64..5,
        any::<bool>(),
    )
        .prop_map(|(name, kind, whatsapp, delay, triggers, pause)| {
            let kind = AutomationKind::all()[kind];
            let channel = if whatsapp {
                Channel::Whatsapp
            } else {
                Channel::Instagram
            };
            let mut automation = Automation::create(
                name,
                kind,
                channel,
                ContentTemplateService::default_message(kind),
                delay,
            );
            for _ in 0..triggers {
                automation.record_trigger().expect("active automation");
            }
            if pause {
                automation.toggle_active();
            }
            automation.take_events();
            automation
        })
}

fn offer_strategy() -> impl Strategy<Value = Offer> {
    ("[A-Za-z ]{1,20}", 0usize..5).prop_map(|(niche, category)| {
        let category = ServiceCategory::all()[category];
        let content = ContentTemplateService::render(category, &niche);
        let mut offer = Offer::create(category, niche, content);
        offer.take_events();
        offer
    })
}

proptest! {
    #![proptest_config(Config::with_cases(64))]

    #[test]
    fn automations_survive_save_and_load(
        automations in proptest::collection::vec(automation_strategy(), 0..8)
    ) {
        let dir = temp_dir("automations");
        let store = automation_store(&dir).expect("open store");

        store.save(&automations).expect("save");
        let loaded = store.load().expect("load");

        prop_assert_eq!(&loaded, &automations);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn saving_replaces_the_previous_snapshot(
        first in proptest::collection::vec(automation_strategy(), 0..6),
        second in proptest::collection::vec(automation_strategy(), 0..6)
    ) {
        let dir = temp_dir("replace");
        let store = automation_store(&dir).expect("open store");

        store.save(&first).expect("save first");
        store.save(&second).expect("save second");

        prop_assert_eq!(store.load().expect("load"), second);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn automation_wire_records_use_renamed_fields(
        automations in proptest::collection::vec(automation_strategy(), 1..5)
    ) {
        let dir = temp_dir("wire");
        let store = automation_store(&dir).expect("open store");

        store.save(&automations).expect("save");
        let raw = std::fs::read_to_string(store.path()).expect("read blob");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("parse blob");

        let records = value.as_array().expect("array of records");
        prop_assert_eq!(records.len(), automations.len());
        for record in records {
            let object = record.as_object().expect("record object");
            for key in [
                "id",
                "name",
                "type",
                "platform",
                "message",
                "delay",
                "isActive",
                "triggerCount",
                "createdAt",
                "updatedAt",
            ] {
                prop_assert!(object.contains_key(key), "missing key {}", key);
            }
            prop_assert!(!object.contains_key("kind"));
            prop_assert!(!object.contains_key("delay_minutes"));
        }
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn offers_keep_value_and_content_across_reload(
        offers in proptest::collection::vec(offer_strategy(), 0..8)
    ) {
        let dir = temp_dir("offers");
        let store = offer_store(&dir).expect("open store");

        store.save(&offers).expect("save");
        let loaded = store.load().expect("load");

        prop_assert_eq!(loaded.len(), offers.len());
        for (loaded, original) in loaded.iter().zip(offers.iter()) {
            prop_assert_eq!(loaded.estimated_value(), original.estimated_value());
            prop_assert_eq!(loaded.content(), original.content());
        }
        prop_assert_eq!(&loaded, &offers);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
