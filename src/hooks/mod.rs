pub mod use_energy_type;
pub mod use_prices;
pub mod use_prod_cons;
pub mod use_theme;
