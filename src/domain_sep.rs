//! This module lists the domain separators in Insulate.

// salt of the prng that samples the system parameters
pub const DOM_SEP_PARAM_GEN: &str = "Insulate parameter generation";

// the info to sample each exponent during parameter generation
pub const DOM_SEP_PARAM_INFO: &str = "Insulate parameter sample";

// salt of the prng that samples the blinding exponents t1, t2
pub const DOM_SEP_SK_INIT: &str = "Insulate secret key init";

// the info to sample a field element during key update
pub const DOM_SEP_SK_UPDATE: &str = "Insulate secret key update";

// the salt to mix fresh entropy into the secret key's prng
pub const DOM_SEP_SK_RERANDOMIZE: &str = "Insulate secret key rerandomize";

// salt and info of the prng that samples the encryption randomness s
pub const DOM_SEP_ENC: &str = "Insulate randomness for encryption";

// expansion label used when a prng is first seeded
pub const DOM_SEP_PRNG_INIT: &str = "Insulate prng init";

// prefix of hash_to_field used in identity -> Zp
pub const DOM_SEP_IDENTITY: &str = "Insulate hash identity";

// prefix of hash_to_field used in H(c1, c2, c3) -> Zp
pub const DOM_SEP_HASH_CT: &str = "Insulate hash ciphertext";

// salt of the key derivation function KDF(D) -> (k1, k2)
pub const DOM_SEP_KDF: &str = "Insulate tag key derivation";

// salt of the extractor Ext(x, label) -> GT
pub const DOM_SEP_EXT: &str = "Insulate randomness extractor";
