pub mod provider_traits;
