//! Stopword sets for word-frequency analysis.
//!
//! A [`StopWords`] value is immutable configuration handed to the
//! [`Tokenizer`](crate::core::tokenizer::Tokenizer). The built-in list
//! ([`RUSSIAN`]) covers high-frequency Russian function words and chat filler;
//! tests and library users can substitute any other list.
//!
//! # Example
//!
//! ```
//! use tgstats::core::stopwords::StopWords;
//!
//! let default = StopWords::russian();
//! assert!(default.contains("это"));
//!
//! let custom = StopWords::from_words(["lol", "ok"]);
//! assert!(custom.contains("lol"));
//! assert!(!custom.contains("это"));
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Built-in Russian stopword list.
pub const RUSSIAN: &[&str] = &[
    // Предлоги
    "в", "на", "с", "к", "по", "за", "из", "у", "о", "об", "от", "до", "для", "при", "без",
    "под", "над", "про", "через", "между", "перед", "после", "около", "возле", "вокруг",
    "ради",
    // Союзы
    "и", "а", "но", "или", "да", "ни", "что", "чтобы", "если", "когда", "как", "потому",
    "поэтому", "так", "тоже", "также", "хотя", "пока", "либо", "чем", "где",
    // Местоимения
    "я", "ты", "он", "она", "оно", "мы", "вы", "они", "мне", "тебе", "ему", "ей", "нам",
    "вам", "им", "меня", "тебя", "его", "её", "ее", "нас", "вас", "их", "мной", "тобой",
    "ним", "ней", "нами", "вами", "ними", "себя", "себе", "собой", "этот", "эта", "это",
    "эти", "этого", "этой", "этих", "этому", "этим", "этом", "тот", "та", "то", "те",
    "того", "той", "тех", "тому", "тем", "том", "кто", "какой", "какая", "какое", "какие",
    "чей", "чья", "чьё", "чье", "чьи", "который", "которая", "которое", "которые", "весь",
    "вся", "всё", "все", "всего", "всей", "всех", "всему", "всем", "сам", "сама", "само",
    "сами", "свой", "своя", "своё", "свое", "свои", "мой", "моя", "моё", "мое", "мои",
    "твой", "твоя", "твоё", "твое", "твои", "наш", "наша", "наше", "наши", "ваш", "ваша",
    "ваше", "ваши",
    // Частицы
    "не", "бы", "же", "ли", "ведь", "вот", "вон", "даже", "лишь", "только", "уже", "ещё",
    "еще", "разве", "неужели",
    // Наречия
    "очень", "там", "тут", "здесь", "туда", "сюда", "оттуда", "отсюда", "тогда", "теперь",
    "сейчас", "потом", "затем", "почему", "зачем", "куда", "откуда", "сколько",
    // Глаголы-связки и вспомогательные
    "быть", "был", "была", "было", "были", "буду", "будет", "будут", "будем", "будете",
    "есть", "нет", "ну", "можно", "нужно", "надо", "нельзя",
    // Прочие частые слова
    "ага", "ок", "окей", "ладно", "хорошо", "просто", "типа", "короче", "вообще", "кстати",
    "блин", "бля", "хз", "лол", "ахах", "хах", "ахаха", "хаха", "ахахах", "хахаха", "чё",
    "че", "ща", "щас",
];

/// An immutable set of words excluded from word-frequency counts.
///
/// Words are compared after lowercasing, so entries should be lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in Russian list.
    pub fn russian() -> Self {
        Self::from_words(RUSSIAN.iter().copied())
    }

    /// An empty set: nothing is filtered.
    pub fn none() -> Self {
        Self {
            words: HashSet::new(),
        }
    }

    /// Builds a set from arbitrary words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a copy of this set extended with more words.
    #[must_use]
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.words.extend(words.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `word` is a stopword.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over the words in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::russian()
    }
}
