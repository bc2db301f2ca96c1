//! # CData-Kit: Wallet Card Token Issuance
//!
//! `cdata-kit` builds the signed, encrypted compact token ("CDATA") that carries
//! structured card data (boarding pass, coupon, ticket) from a partner system to
//! a receiving wallet platform.
//!
//! The pipeline is encrypt-then-sign: the card payload is first encrypted for the
//! platform's RSA public key (RSA1_5 key wrapping + AES-128-GCM content
//! encryption, RFC 7516 compact form), and the resulting five-segment string is
//! then signed with the partner's RSA private key (RS256, RFC 7515 compact form).
//!
//! ## Core Concepts
//!
//! - **Key loading** (`keys`): turns partner-supplied PEM or bare-base64 text into
//!   typed key material, including an on-the-fly PKCS#1 → PKCS#8 rewrap for legacy
//!   RSA private keys and public-key extraction from X.509 certificates.
//! - **`CdataIssuer`** (`token`): the stateless issuer. Every call is independent;
//!   no key material or intermediate state is retained after it returns.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cdata_kit::prelude::*;
//!
//! fn main() -> Result<(), cdata_kit::Error> {
//!     let platform_key = load_public_key_from_certificate(&platform_cert_pem)?;
//!     let partner_pub = load_public_key_from_certificate(&partner_cert_pem)?;
//!     let partner_priv = load_private_key(&partner_key_pem)?;
//!
//!     let issuer = CdataIssuer::new();
//!     let signer = SignerKeyPair::new(partner_pub, partner_priv);
//!     let cdata = issuer.issue("4059557693262156416", &platform_key, &signer, &card_json)?;
//!     println!("Generated CDATA: {cdata}");
//!     Ok(())
//! }
//! ```

pub mod common;
pub mod keys;
pub mod token;

pub use common::config::IssuerConfig;
pub use common::errors::Error;
pub use keys::material::{
    RsaPrivateKeyMaterial, RsaPublicKeyMaterial, decode_key_text, load_any_public_key,
    load_private_key, load_public_key, load_public_key_from_certificate,
};
pub use token::issuer::CdataIssuer;
pub use token::jws::SignerKeyPair;

// --- Prelude ---
// A collection of the most commonly used types and functions.
pub mod prelude {
    pub use crate::common::config::IssuerConfig;
    pub use crate::common::errors::Error;
    pub use crate::keys::errors::KeyError;
    pub use crate::keys::material::{
        RsaPrivateKeyMaterial, RsaPublicKeyMaterial, decode_key_text, load_any_public_key,
        load_private_key, load_public_key, load_public_key_from_certificate,
    };
    pub use crate::token::errors::TokenError;
    pub use crate::token::issuer::CdataIssuer;
    pub use crate::token::jws::SignerKeyPair;
}

/// The version of the `cdata-kit` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
