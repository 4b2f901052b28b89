use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::compression::lzw;
use crate::constants::SHARE_QUERY_PARAM;
use crate::errors::{AppError, AppResult};
use crate::models::domain::Quiz;

/// Characters escaped ahead of the Base64 stage: everything except ASCII
/// alphanumerics and the URI-component survivors.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Produces and consumes the opaque quiz share token.
pub struct ShareCodeService;

impl ShareCodeService {
    /// Serializes, compresses, and text-armors a quiz into a share token
    /// safe for URL query strings and plain-text paste fields.
    pub fn encode(quiz: &Quiz) -> AppResult<String> {
        let json = serde_json::to_string(quiz)
            .map_err(|err| AppError::EncodeFailure(format!("serialization failed: {err}")))?;
        let compressed = lzw::compress(&json)?;
        let escaped = utf8_percent_encode(&compressed, URI_COMPONENT).to_string();
        let token = BASE64.encode(escaped.as_bytes());
        log::debug!(
            "encoded quiz '{}' ({} questions) into a {}-character share token",
            quiz.quiz_code,
            quiz.questions.len(),
            token.len()
        );
        Ok(token)
    }

    /// Reverses [`Self::encode`]. Either the full quiz comes back or a
    /// [`AppError::DecodeFailure`] does; malformed input never panics and
    /// never yields a partial record.
    pub fn decode(token: &str) -> AppResult<Quiz> {
        // Intermediate transports tend to turn '+' into spaces.
        let normalized = token.replace(' ', "+");
        let escaped_bytes = BASE64
            .decode(normalized.as_bytes())
            .map_err(|err| AppError::DecodeFailure(format!("invalid base64: {err}")))?;
        let escaped = String::from_utf8(escaped_bytes)
            .map_err(|err| AppError::DecodeFailure(format!("invalid payload text: {err}")))?;
        let compressed = percent_decode_str(&escaped)
            .decode_utf8()
            .map_err(|err| AppError::DecodeFailure(format!("invalid escape sequence: {err}")))?;
        let json = lzw::decompress(&compressed);
        serde_json::from_str(&json)
            .map_err(|err| AppError::DecodeFailure(format!("not a quiz payload: {err}")))
    }

    /// Builds the link instructors hand out: `<base>?share=<token>`.
    pub fn share_url(base_url: &str, quiz: &Quiz) -> AppResult<String> {
        let token = Self::encode(quiz)?;
        let escaped = utf8_percent_encode(&token, URI_COMPONENT);
        Ok(format!("{base_url}?{SHARE_QUERY_PARAM}={escaped}"))
    }

    /// Pulls the share token out of a pasted link, if present.
    pub fn token_from_share_url(url: &str) -> Option<String> {
        let parsed = Url::parse(url).ok()?;
        parsed
            .query_pairs()
            .find(|(key, _)| key == SHARE_QUERY_PARAM)
            .map(|(_, value)| value.into_owned())
    }
}
