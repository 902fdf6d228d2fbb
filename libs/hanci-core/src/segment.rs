//! Token segmentation for spoken-practice scoring.
//!
//! Explicit whitespace wins when present. Otherwise CJK punctuation is
//! stripped and the text is segmented greedily left to right: known
//! two-character words become tokens, characters from a fixed standalone set
//! become single-character tokens, and everything else accumulates into runs.

/// Common two-character words recognized by the greedy segmenter.
const TWO_CHAR_WORDS: &[&str] = &[
    "中国", "学习", "学習", "练习", "練習", "朋友", "老师", "老師", "学生",
    "今天", "明天", "昨天", "现在", "現在", "时间", "時間", "工作", "公司",
    "家里", "学校", "医院", "醫院", "银行", "銀行", "商店", "饭店",
    "喜欢", "喜歡", "知道", "认为", "認為", "觉得", "覺得", "希望", "想要",
    "什么", "什麼", "怎么", "怎麼", "哪里", "哪裡",
];

/// Characters that stand alone as single tokens.
const STANDALONE_CHARS: &[char] = &[
    '我', '你', '他', '她', '它', '们', '們', '的', '了', '在', '是', '有', '不', '很', '也', '都',
    '一', '二', '三', '四', '五', '六', '七', '八', '九', '十', '百', '千', '万', '萬',
];

const PUNCTUATION: &[char] = &['。', '，', '、', '？', '！', '：', '；'];

/// Segment text into tokens for per-token scoring.
pub fn segment(text: &str) -> Vec<String> {
    if text.contains(char::is_whitespace) {
        return text.split_whitespace().map(str::to_string).collect();
    }

    let cleaned: String = text.chars().filter(|c| !PUNCTUATION.contains(c)).collect();
    segment_greedy(&cleaned)
}

fn segment_greedy(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut run = String::new();
    let mut i = 0;

    while i < chars.len() {
        if i + 1 < chars.len() {
            let pair: String = chars[i..i + 2].iter().collect();
            if TWO_CHAR_WORDS.contains(&pair.as_str()) {
                if !run.is_empty() {
                    segments.push(std::mem::take(&mut run));
                }
                segments.push(pair);
                i += 2;
                continue;
            }
        }

        let c = chars[i];
        if STANDALONE_CHARS.contains(&c) {
            if !run.is_empty() {
                segments.push(std::mem::take(&mut run));
            }
            segments.push(c.to_string());
        } else {
            run.push(c);
        }
        i += 1;
    }

    if !run.is_empty() {
        segments.push(run);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn whitespace_delimiters_take_precedence() {
        assert_eq!(segment("nǐ hǎo ma"), vec!["nǐ", "hǎo", "ma"]);
    }

    #[test]
    fn known_two_char_words_are_split_out() {
        assert_eq!(segment("我喜欢中国"), vec!["我", "喜欢", "中国"]);
    }

    #[test]
    fn standalone_chars_break_runs() {
        assert_eq!(segment("这是书"), vec!["这", "是", "书"]);
    }

    #[test]
    fn punctuation_is_stripped() {
        assert_eq!(segment("你好！今天呢？"), vec!["你", "好", "今天", "呢"]);
    }

    #[test]
    fn unknown_characters_accumulate_into_runs() {
        assert_eq!(segment("电脑"), vec!["电脑"]);
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(segment("").is_empty());
    }
}
