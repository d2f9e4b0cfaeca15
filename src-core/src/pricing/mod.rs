pub(crate) mod pricing_service;
pub(crate) mod pricing_traits;

pub use pricing_service::PriceService;
pub use pricing_traits::PriceServiceTrait;
