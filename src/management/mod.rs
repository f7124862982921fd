pub mod asset_loading;
pub mod material_tuning;
