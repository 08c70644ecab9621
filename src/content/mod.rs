//! Vocabulary content: where words and meanings come from, and how a
//! question's answer choices are built from them.

pub mod choices;
pub mod vocabulary;

pub use choices::generate_choices;
pub use vocabulary::{
  load_vocabulary, BuiltinVocabulary, JsonVocabulary, Vocabulary, VocabularyError, VocabularySource,
};
