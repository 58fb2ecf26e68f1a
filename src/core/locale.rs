//! # Locale
//!
//! User-visible text for every supported language, plus the instruction sent to
//! the model. Korean is the default.

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    #[value(name = "ko")]
    Korean,
    #[value(name = "en")]
    English,
}

/// Fixed UI strings for one locale.
pub struct Strings {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,
    pub form_title: &'static str,
    pub label_title: &'static str,
    pub label_watched_date: &'static str,
    pub label_genre: &'static str,
    pub label_rating: &'static str,
    pub label_review: &'static str,
    pub label_poster: &'static str,
    pub assist_button: &'static str,
    pub assist_loading: &'static str,
    pub submit_button: &'static str,
    pub required_fields: &'static str,
    pub invalid_date: &'static str,
    pub enter_title_first: &'static str,
    pub assist_failed: &'static str,
    pub empty_list_title: &'static str,
    pub empty_list_hint: &'static str,
    pub no_review: &'static str,
    pub entry_added: &'static str,
    pub entry_deleted: &'static str,
    pub poster_loaded: &'static str,
    pub poster_failed: &'static str,
    pub model_label: &'static str,
    pub form_nav_hint: &'static str,
    pub alert_dismiss_hint: &'static str,
}

const KOREAN: Strings = Strings {
    app_title: "2025 영화 기록",
    app_subtitle: "나만의 영화 일지를 작성해보세요.",
    form_title: "새 영화 기록하기",
    label_title: "영화 제목",
    label_watched_date: "관람일 (YYYY-MM-DD)",
    label_genre: "장르",
    label_rating: "별점",
    label_review: "리뷰",
    label_poster: "포스터 이미지 (파일 경로)",
    assist_button: "AI 질문 받기",
    assist_loading: "생성 중...",
    submit_button: "기록 추가하기",
    required_fields: "영화 제목, 관람일, 별점은 필수 항목입니다.",
    invalid_date: "관람일은 YYYY-MM-DD 형식이어야 합니다.",
    enter_title_first: "영화 제목을 먼저 입력해주세요.",
    assist_failed: "AI 질문 생성에 실패했습니다. 잠시 후 다시 시도해주세요.",
    empty_list_title: "아직 기록된 영화가 없습니다.",
    empty_list_hint: "왼쪽 양식을 사용하여 첫 영화를 기록해보세요.",
    no_review: "작성된 리뷰가 없습니다.",
    entry_added: "기록이 추가되었습니다.",
    entry_deleted: "기록이 삭제되었습니다.",
    poster_loaded: "포스터를 불러왔습니다.",
    poster_failed: "포스터를 불러오지 못했습니다",
    model_label: "모델",
    form_nav_hint: "Tab 이동 · Esc 목록",
    alert_dismiss_hint: "Enter / Esc 닫기",
};

const ENGLISH: Strings = Strings {
    app_title: "2025 Movie Journal",
    app_subtitle: "Write your own movie diary.",
    form_title: "Record a new movie",
    label_title: "Title",
    label_watched_date: "Watched on (YYYY-MM-DD)",
    label_genre: "Genre",
    label_rating: "Rating",
    label_review: "Review",
    label_poster: "Poster image (file path)",
    assist_button: "Get AI questions",
    assist_loading: "Generating...",
    submit_button: "Add entry",
    required_fields: "Title, watched date, and rating are required.",
    invalid_date: "Watched date must be in YYYY-MM-DD format.",
    enter_title_first: "Please enter a movie title first.",
    assist_failed: "Failed to generate AI questions. Please try again later.",
    empty_list_title: "No movies recorded yet.",
    empty_list_hint: "Use the form on the left to record your first movie.",
    no_review: "No review written.",
    entry_added: "Entry added.",
    entry_deleted: "Entry deleted.",
    poster_loaded: "Poster loaded.",
    poster_failed: "Could not load poster",
    model_label: "model",
    form_nav_hint: "Tab move · Esc list",
    alert_dismiss_hint: "Enter / Esc to close",
};

impl Locale {
    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Korean => &KOREAN,
            Locale::English => &ENGLISH,
        }
    }

    /// The instruction asking the model for three unnumbered review questions,
    /// one per line, in this locale's language.
    pub fn review_questions_prompt(self, title: &str) -> String {
        match self {
            Locale::Korean => format!(
                "영화 '{title}'에 대한 깊이 있는 리뷰를 작성하는 데 도움이 될 만한 흥미로운 질문 3가지를 한국어로 작성해줘. \
                 각 질문은 줄바꿈으로 구분하고, 번호 없이 질문만 제공해줘."
            ),
            Locale::English => format!(
                "Write 3 interesting questions in English that would help me write an in-depth review of the movie '{title}'. \
                 Separate each question with a line break and give only the questions, without numbering."
            ),
        }
    }

    /// Parses a locale code such as `ko` or `en-US`.
    pub fn from_code(code: &str) -> Option<Locale> {
        let lang = code.split(['-', '_']).next().unwrap_or("").to_ascii_lowercase();
        match lang.as_str() {
            "ko" => Some(Locale::Korean),
            "en" => Some(Locale::English),
            _ => None,
        }
    }
}
