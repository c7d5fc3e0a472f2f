use std::collections::HashMap;

const BUILTIN_TERMS: [(&str, &str); 6] = [
    ("りんご", "果物。赤くて甘い。"),
    ("レモン", "柑橘類。おそらく柑橘類。"),
    ("シス開", "正式名称：システム開発部。わいの故郷や"),
    ("MP", "MPはカッスやな！"),
    ("slappy", "最強生物。王の資質を持ってるやっちゃな"),
    ("山崎さん", "まあまあやな"),
];

/// Immutable term -> definition table, built once at startup and shared read-only.
///
/// Keys match exactly: no trimming, no case folding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glossary {
    entries: HashMap<String, String>,
}

impl Glossary {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_TERMS)
    }

    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries =
            entries.into_iter().map(|(term, definition)| (term.into(), definition.into())).collect();
        Self { entries }
    }

    /// Returns `None` for unknown terms; a miss is not an error.
    pub fn lookup(&self, term: &str) -> Option<&str> {
        self.entries.get(term).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermTag {
    Internal,
    General,
}

impl TermTag {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Internal => "社内用語",
            Self::General => "一般用語",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermCard {
    pub name: String,
    pub reading: String,
    pub aliases: Vec<String>,
    pub meaning: String,
    pub tags: Vec<TermTag>,
}

impl TermCard {
    pub fn summary_mrkdwn(&self) -> String {
        let aliases = self.aliases.join(",");
        let tags =
            self.tags.iter().map(|tag| format!("`{}`", tag.label())).collect::<Vec<_>>().join(" ");
        format!(
            "用語:*{}*\n 読み方:{}\n その他の呼称:{}\n 意味:{}\n {}",
            self.name, self.reading, aliases, self.meaning, tags
        )
    }
}

/// The card `/ask` answers with.
pub fn featured_term() -> TermCard {
    TermCard {
        name: "システム開発".to_owned(),
        reading: "しすてむかいはつ".to_owned(),
        aliases: vec!["シス開".to_owned()],
        meaning: "バイトルやはたらこをはじめとしたサービスを生み出してきたエンジニア集団".to_owned(),
        tags: vec![TermTag::Internal, TermTag::General],
    }
}
