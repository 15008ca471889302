//! Dashboard defaults: form choices, fallback symbol, placeholder balance.

pub struct FormDefaults {
    pub entry_value: &'static str,
    pub target_value: &'static str,
    pub stop_loss: &'static str,
}

pub struct DashboardConfig {
    /// Symbol used when the asset selector is absent or empty.
    pub fallback_asset: &'static str,
    pub assets: &'static [&'static str],
    pub ai_models: &'static [&'static str],
    pub strategies: &'static [&'static str],
    /// No balance endpoint exists yet, so this is all the top bar shows.
    pub placeholder_balance: &'static str,
    pub form: FormDefaults,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    fallback_asset: "BTC/USD",
    assets: &["BTC/USD", "ETH/USD", "SOL/USD"],
    ai_models: &["Viktor IA (DQN)"],
    strategies: &["DQN", "Simple"],
    placeholder_balance: "$10,000.00 (Simulated)",
    form: FormDefaults {
        entry_value: "100",
        target_value: "150",
        stop_loss: "10",
    },
};
