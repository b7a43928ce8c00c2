mod static_identity_provider;

pub use static_identity_provider::StaticIdentityProvider;
