use crate::test_data;
use sidereal::io::{ConfigError, ConfigRepr, Configurable, SequenceCfg};
use sidereal::time::{Timestamp, TimestampConfig};

#[test]
fn load_many_timestamps() {
    let configs = TimestampConfig::load_many(test_data("timestamps.yaml")).unwrap();
    assert_eq!(configs.len(), 3);
    assert_eq!(configs[0].hour, 12);
    assert_eq!(configs[0].minute, 0);

    let timestamps: Vec<Timestamp> = configs
        .into_iter()
        .map(|cfg| Timestamp::from_config(cfg).unwrap())
        .collect();
    assert_eq!(timestamps[0].jd_utc(), 2_451_545.0);
    assert_eq!(timestamps[1].nanosecond(), 500_000_000);
    assert_eq!(timestamps[2].day(), 29);
}

#[test]
fn load_named_timestamps() {
    let named = TimestampConfig::load_named(test_data("named_timestamps.yaml")).unwrap();
    assert_eq!(named.len(), 2);
    let vallado = Timestamp::from_config(named["vallado"]).unwrap();
    assert_eq!(vallado.tai_minus_utc(), 32.0);
    assert_eq!(vallado.to_config().unwrap(), named["vallado"]);
}

#[test]
fn invalid_timestamp_file() {
    let err = Timestamp::from_yaml(test_data("invalid_timestamp.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig { .. }), "{err}");
    assert!(matches!(
        TimestampConfig::loads_many("- year: 2020\n  month: [1]\n"),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn sequences_from_yaml() {
    let sequences = SequenceCfg::load_many(test_data("sequences.yaml")).unwrap();
    assert_eq!(sequences.len(), 2);

    let daily = sequences[0].generate().unwrap();
    assert_eq!(daily.len(), 5);
    assert_eq!(daily[4].day(), 5);

    let five = sequences[1].generate().unwrap();
    assert_eq!(five.len(), 5);
    assert_eq!(five[2].hour(), 12);
}

#[test]
fn timestamp_config_from_toml() {
    let cfg: TimestampConfig = toml::from_str(
        r#"
        year = 2019
        month = 11
        day = 5
        minute = 4
        "#,
    )
    .unwrap();
    assert_eq!(
        cfg,
        TimestampConfig::builder()
            .year(2019)
            .month(11)
            .day(5)
            .minute(4)
            .build()
    );
    assert_eq!(Timestamp::try_from(cfg).unwrap().minute(), 4);
}
