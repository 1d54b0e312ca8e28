use tiktoken_rs::{cl100k_base, p50k_base, r50k_base, CoreBPE};

use crate::error::{HarnessError, Result};
use crate::models::Encoding;

/// A loaded byte-pair encoder. Build it once and share it by reference;
/// loading the vocabulary is far more expensive than encoding.
pub struct Tokenizer {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl Tokenizer {
    pub fn new(encoding: Encoding) -> Result<Self> {
        let bpe = match encoding {
            Encoding::Cl100kBase => cl100k_base(),
            Encoding::P50kBase => p50k_base(),
            Encoding::R50kBase => r50k_base(),
        }
        .map_err(|e| HarnessError::Tokenizer {
            encoding: encoding.name().to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { encoding, bpe })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Special-token markers in `text` are counted as ordinary text.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
