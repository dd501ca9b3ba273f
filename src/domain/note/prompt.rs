//! Formatting instruction prompt

/// Built-in instruction for turning a raw transcript into a SOAP-format
/// nursing record. Sent as-is to the generator; the heuristic fallback
/// ignores it.
const DEFAULT_PROMPT: &str = r#"渡されたテキストを元に看護記録をSOAP形式に要約してまとめてください。
最初に部屋番号とベッドナンバーを記載してからSOAP形式で記述します。
SOAP形式の記載方法は下記に従ってください。
SOAPのすべての項目を埋める必要はなく、必要なもののみ書き出してください。
SOAPに分類されない項目はカットしてください。
Sは主観的データ(Subjective Data)
患者さんの発した言葉。要約してもよいが、患者さんの発言以外を記録するのはNG!
例) 分かりました。 OKです。 など
Oは客観的データ(Objective Data)
観察したこと。目で見たことだけでなく、 触診や聴診で得られたデータ・バイタルサインや検査データなども含まれる。
スタッフ同士が共通認識できるスケールなどがあれば、それらを用いる。
例) フェイススケール3、 ブリストルスケール4型、
×不安げな表情 ○うつむき硬い表情など
Aはアセスメント(Assessment)
実際に行った看護、データとデータから解釈・分析・判断したこと
Pは計画(Plan)
S、O、Aをふまえた今後の方針
渡されたテキストにない情報は絶対に追加しないでください。"#;

/// Value object holding the formatting instruction text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoapPrompt {
    content: String,
}

impl SoapPrompt {
    /// Build a prompt from custom instruction text
    pub fn custom(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Get the prompt content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Default for SoapPrompt {
    fn default() -> Self {
        Self {
            content: DEFAULT_PROMPT.to_string(),
        }
    }
}

/// An immutable formatting request: the instruction prompt paired with the
/// transcript text to reformat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    prompt: SoapPrompt,
    transcript: String,
}

impl FormatRequest {
    pub fn new(prompt: SoapPrompt, transcript: impl Into<String>) -> Self {
        Self {
            prompt,
            transcript: transcript.into(),
        }
    }

    pub fn prompt(&self) -> &SoapPrompt {
        &self.prompt
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }
}
