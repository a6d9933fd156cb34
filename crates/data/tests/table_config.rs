use blackjack_core::{PayoutRatio, TableConfig, MAX_BANK};
use blackjack_data::{load_table_config, validate_table_config, TABLE_CONFIG_FILE};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn bundled_config_matches_defaults() {
    let config = load_table_config(&assets_root().join(TABLE_CONFIG_FILE)).expect("load table");
    assert_eq!(config, TableConfig::default());
}

macro_rules! rejected {
    ($($name:ident: $patch:expr => $needle:expr;)+) => {
        $(
            #[test]
            fn $name() {
                let mut config = TableConfig::default();
                let patch: fn(&mut TableConfig) = $patch;
                patch(&mut config);
                let err = validate_table_config(&config).expect_err("config should be rejected");
                assert!(
                    err.to_string().contains($needle),
                    "unexpected message: {err}"
                );
            }
        )+
    };
}

rejected! {
    blank_name: |c| c.player_name = "  ".to_string() => "player_name";
    negative_bank: |c| c.starting_bank = -1 => "starting_bank";
    zero_min_bet: |c| c.min_bet = 0 => "min_bet";
    negative_house: |c| c.house_bank = -5 => "house_bank";
    stingy_natural: |c| c.natural_payout = PayoutRatio { numerator: 1, denominator: 2 } => "less than an even-money win";
    natural_below_even_money: |c| c.natural_payout = PayoutRatio { numerator: 3, denominator: 2 } => "less than an even-money win";
    bank_over_ceiling: |c| c.starting_bank = 4_000_000_000_000_000_000 => "starting_bank";
    house_over_ceiling: |c| c.house_bank = MAX_BANK + 1 => "house_bank";
}

#[test]
fn generous_tables_are_accepted() {
    let config = TableConfig {
        natural_payout: PayoutRatio::new(3, 1).expect("ratio"),
        dealer_hits_soft_17: true,
        min_bet: 10,
        ..TableConfig::default()
    };
    assert!(validate_table_config(&config).is_ok());
}

#[test]
fn even_money_natural_and_ceiling_banks_pass() {
    let config = TableConfig {
        natural_payout: PayoutRatio::EVEN_MONEY,
        starting_bank: MAX_BANK,
        house_bank: MAX_BANK,
        ..TableConfig::default()
    };
    assert!(validate_table_config(&config).is_ok());
}
