/// 焦点关键词分析
///
/// 所有匹配都是字面量子串匹配，不区分大小写，也不要求单词边界，
/// 因此 `c++`、`a.b*c` 这类关键词不需要转义。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordAnalyzer {
    keyword: String,
}

impl KeywordAnalyzer {
    /// 关键词会被转为小写；空关键词视为不存在
    pub fn new(keyword: &str) -> Option<Self> {
        if keyword.is_empty() {
            return None;
        }
        Some(Self {
            keyword: keyword.to_lowercase(),
        })
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// 文本中是否包含关键词
    pub fn found_in(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.keyword)
    }

    /// 永久链接中是否包含关键词（空白替换为连字符）
    pub fn found_in_slug(&self, slug: &str) -> bool {
        slug.to_lowercase().contains(&self.slug_form())
    }

    /// 关键词的永久链接形式：连续空白替换为一个 `-`
    pub fn slug_form(&self) -> String {
        self.keyword.split_whitespace().collect::<Vec<_>>().join("-")
    }

    /// 统计关键词出现次数，重叠的出现也计入
    pub fn count_occurrences(&self, text: &str) -> usize {
        let haystack = text.to_lowercase();
        let step = self.keyword.chars().next().map_or(1, char::len_utf8);

        let mut count = 0;
        let mut start = 0;
        while let Some(pos) = haystack[start..].find(&self.keyword) {
            count += 1;
            start += pos + step;
        }
        count
    }
}

/// 关键词密度（百分比），词数为 0 时为 0
pub fn density(occurrences: usize, word_count: usize) -> f64 {
    if word_count == 0 {
        return 0.0;
    }
    occurrences as f64 * 100.0 / word_count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(keyword: &str) -> KeywordAnalyzer {
        KeywordAnalyzer::new(keyword).unwrap()
    }

    #[test]
    fn empty_keyword_is_absent() {
        assert!(KeywordAnalyzer::new("").is_none());
    }

    #[test]
    fn matching_ignores_case() {
        let kw = analyzer("Gardening");
        assert!(kw.found_in("Urban GARDENING tips"));
        assert!(!kw.found_in("Urban farming tips"));
    }

    #[test]
    fn slug_match_uses_hyphens() {
        let kw = analyzer("urban  gardening");
        assert_eq!(kw.slug_form(), "urban-gardening");
        assert!(kw.found_in_slug("Best-Urban-Gardening-Tips"));
        assert!(!kw.found_in_slug("urban_gardening"));
    }

    #[test]
    fn counts_substrings_inside_words() {
        let kw = analyzer("garden");
        assert_eq!(kw.count_occurrences("Garden gardens gardening, a GARDEN."), 4);
    }

    #[test]
    fn counts_overlapping_occurrences() {
        assert_eq!(analyzer("aa").count_occurrences("aaaa"), 3);
        assert_eq!(analyzer("abab").count_occurrences("ababab"), 2);
    }

    #[test]
    fn metacharacters_are_literal() {
        let kw = analyzer("c++");
        assert_eq!(kw.count_occurrences("C++ and c++ but not c+"), 2);

        let kw = analyzer("a.b*c");
        assert_eq!(kw.count_occurrences("a.b*c abbbc a.b*c"), 2);
        assert!(kw.found_in("see A.B*C here"));

        let kw = analyzer("(");
        assert_eq!(kw.count_occurrences("f(x) g(y"), 2);
    }

    #[test]
    fn handles_multibyte_keywords() {
        let kw = analyzer("café");
        assert_eq!(kw.count_occurrences("Café, CAFÉ and cafés"), 3);
        assert_eq!(analyzer("éé").count_occurrences("ééé"), 2);
    }

    #[test]
    fn density_guards_zero_words() {
        assert_eq!(density(3, 0), 0.0);
        assert!((density(1, 50) - 2.0).abs() < f64::EPSILON);
    }
}
