pub mod argon2_credential_hasher_impl;
