//! Script opcodes used by pay-to-pubkey-hash locking and unlocking scripts.

/// Pushes an empty array onto the stack.
pub const OP_0: u8 = 0;
/// Base for direct pushes: `OP_PUSH + n` pushes the next n bytes (n: 1-75).
pub const OP_PUSH: u8 = 0;
/// Next byte is push length (up to 255 bytes).
pub const OP_PUSHDATA1: u8 = 76;
/// Next two bytes are push length (up to 65535 bytes).
pub const OP_PUSHDATA2: u8 = 77;
/// Next four bytes are push length.
pub const OP_PUSHDATA4: u8 = 78;
/// Pushes 1 onto the stack.
pub const OP_1: u8 = 81;
/// Duplicates the top stack item.
pub const OP_DUP: u8 = 118;
/// Fails unless the top two stack items are equal.
pub const OP_EQUALVERIFY: u8 = 136;
/// The input is hashed twice: first with SHA-256 and then with RIPEMD-160.
pub const OP_HASH160: u8 = 169;
/// Checks a signature against the transaction digest and a public key.
pub const OP_CHECKSIG: u8 = 172;
