pub mod en;

/**
    The supported word list languages.

    The word list ordering is part of the wire contract. Two
    implementations using different orderings produce different
    mnemonics for the same entropy and are not interoperable.
*/
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Language {
    English
}

impl Language {
    pub fn word_list(&self) -> &'static [&'static str; 2048] {
        match self {
            Language::English => &en::WORDS
        }
    }

    /**
        Index of a word in the list, if present.
        Used to invert the mnemonic back into bits.
    */
    pub fn word_index(&self, word: &str) -> Option<usize> {
        self.word_list().iter().position(|w| *w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_list_boundaries() {
        let list = Language::English.word_list();
        assert_eq!(list[0], "abandon");
        assert_eq!(list[3], "about");
        assert_eq!(list[2047], "zoo");
    }

    #[test]
    fn word_index_round_trip() {
        let lang = Language::English;
        assert_eq!(lang.word_index("abandon"), Some(0));
        assert_eq!(lang.word_index("zoo"), Some(2047));
        assert_eq!(lang.word_index("notaword"), None);
    }
}
