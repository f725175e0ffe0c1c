pub mod jwt_token_codec;

pub use jwt_token_codec::{JwtTokenCodec, TokenConfig};
