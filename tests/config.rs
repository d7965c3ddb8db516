#![cfg(feature = "serde")]

use murmurhash3::{Preference, Variant};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Config {
    variant: Variant,
    #[serde(default)]
    preference: Preference,
    #[serde(default)]
    seed: u32,
}

#[test]
fn variant_and_preference_from_json() {
    let config: Config = serde_json::from_str(r#"{ "variant": "x64_128", "preference": "x86", "seed": 42 }"#).unwrap();
    assert_eq!(
        config,
        Config {
            variant: Variant::X64_128,
            preference: Preference::X86,
            seed: 42,
        }
    );

    let config: Config = serde_json::from_str(r#"{ "variant": "x86_32" }"#).unwrap();
    assert_eq!((config.preference, config.seed), (Preference::Auto, 0));
    assert!(serde_json::from_str::<Config>(r#"{ "variant": "sha1" }"#).is_err());
}

#[test]
fn round_trips_names() {
    assert_eq!(serde_json::to_string(&Variant::X86_128).unwrap(), r#""x86_128""#);
    assert_eq!(serde_json::to_string(&Preference::Auto).unwrap(), r#""auto""#);
}
