//! # Localization and theme state
//!
//! [`Preferences`] is the process-wide appearance state: a dark-mode flag and
//! the active [`Language`]. The UI keeps one instance in a context signal and
//! every component reads it through the same accessor.
//!
//! [`translate`] is a static dictionary lookup. English returns the key
//! itself; Arabic returns the dictionary entry or, for keys nobody translated
//! yet, the key unchanged. Misses are silent.

use serde::{Deserialize, Serialize};

use crate::config::PortalConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {
    /// BCP 47 tag for the `lang` attribute.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        self == Language::Ar
    }

    /// Value for the `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }
}

/// Translate `key` into `language`, falling back to the key.
pub fn translate(language: Language, key: &str) -> &str {
    match language {
        Language::En => key,
        Language::Ar => arabic(key).unwrap_or(key),
    }
}

/// Theme and language shared by every component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub language: Language,
}

impl Preferences {
    pub fn from_config(config: &PortalConfig) -> Self {
        Self {
            dark_mode: config.appearance.dark_mode,
            language: config.appearance.language,
        }
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn is_rtl(&self) -> bool {
        self.language.is_rtl()
    }

    /// Translate with the active language.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.language, key)
    }

    /// Class list for the root element.
    pub fn root_class(&self) -> &'static str {
        if self.dark_mode {
            "portal dark"
        } else {
            "portal"
        }
    }
}

fn arabic(key: &str) -> Option<&'static str> {
    let text = match key {
        // Common
        "Welcome" => "مرحباً",
        "Logout" => "تسجيل الخروج",
        "Login" => "تسجيل الدخول",
        "Student Dashboard" => "لوحة تحكم الطالب",
        "Admin Dashboard" => "لوحة تحكم المسؤول",
        "Cancel" => "إلغاء",
        "Confirm" => "تأكيد",
        "OK" => "حسناً",
        "Back" => "رجوع",
        "Loading..." => "جاري التحميل...",

        // Student dashboard
        "Student Information" => "معلومات الطالب",
        "Past Exams" => "الاختبارات السابقة",
        "Available Exams" => "الاختبارات المتاحة",
        "GAT Training" => "تدريب القدرات",
        "Mathematics" => "الرياضيات",
        "Arabic" => "اللغة العربية",
        "Train" => "تدريب",
        "Exam" => "اختبار",
        "Exams Taken" => "الاختبارات المكتملة",
        "Avg. Score" => "متوسط الدرجات",
        "Last Login" => "آخر تسجيل دخول",
        "Tips for Success" => "نصائح للنجاح",
        "Name" => "الاسم",
        "ID" => "الرقم التعريفي",
        "Announcements" => "الإعلانات",
        "Read all instructions carefully before starting an exam" => {
            "اقرأ جميع التعليمات بعناية قبل بدء الاختبار"
        }
        "Make sure you have a stable internet connection" => "تأكد من وجود اتصال إنترنت مستقر",
        "Use the GAT Training modules to prepare for your exams" => {
            "استخدم وحدات تدريب القدرات للاستعداد للاختبارات"
        }
        "End Date" => "تاريخ الانتهاء",
        "Duration" => "المدة",
        "Organizer" => "المنظم",
        "Start" => "ابدأ",
        "No available exams at the moment" => "لا توجد اختبارات متاحة حالياً",
        "Check back later for upcoming exams" => "تحقق لاحقاً من الاختبارات القادمة",
        "Date" => "التاريخ",
        "correct" => "صحيح",

        // Admin dashboard
        "Students" => "الطلاب",
        "Exam Scores" => "درجات الاختبارات",
        "Create Exam" => "إنشاء اختبار",
        "Admin Management" => "إدارة المسؤولين",
        "Homepage" => "الصفحة الرئيسية",
        "Settings" => "الإعدادات",
        "Help" => "المساعدة",
        "Student Management" => "إدارة الطلاب",
        "Exam Results Overview" => "نظرة عامة على نتائج الاختبارات",
        "Create New Examination" => "إنشاء اختبار جديد",
        "Administrator Management" => "إدارة المسؤولين",
        "Total Students" => "إجمالي الطلاب",
        "Active Exams" => "الاختبارات النشطة",
        "Average Score" => "متوسط الدرجات",
        "Root Admin" => "المسؤول الرئيسي",
        "Admin Portal v1.0" => "بوابة المسؤول الإصدار 1.0",
        "Last update" => "آخر تحديث",
        "View and manage all registered students" => "عرض وإدارة جميع الطلاب المسجلين",
        "Review examination results and statistics" => "مراجعة نتائج الاختبارات والإحصائيات",
        "Create and publish new exams for students" => "إنشاء ونشر اختبارات جديدة للطلاب",
        "Manage admin accounts and privileges" => "إدارة حسابات المسؤولين والصلاحيات",

        // GAT
        "GAT Exam" => "اختبار القدرات",
        "GAT Bank" => "بنك القدرات",
        "Select Difficulty" => "اختر المستوى",
        "Easy" => "سهل",
        "Medium" => "متوسط",
        "Hard" => "صعب",
        "Random" => "عشوائي",
        "Start Exam" => "بدء الاختبار",
        "Return to Dashboard" => "العودة إلى لوحة التحكم",
        "Question Banks" => "بنوك الأسئلة",
        "Bank" => "بنك",
        "Solved" => "محلول",
        "Unsolved" => "غير محلول",

        // Announcements
        "Important Updates" => "تحديثات مهمة",
        "General" => "عام",
        "Urgent" => "عاجل",
        "System Maintenance" => "صيانة النظام",
        "New Feature" => "ميزة جديدة",
        "GAT preparation workshops will be held this weekend" => {
            "ستقام ورش عمل تحضيرية لاختبار القدرات هذا الأسبوع"
        }
        "New practice exams have been added to the system" => {
            "تمت إضافة اختبارات تدريبية جديدة إلى النظام"
        }
        "System will be under maintenance on Friday night from 11 PM to 2 AM" => {
            "سيخضع النظام للصيانة ليلة الجمعة من 11 مساءً حتى 2 صباحًا"
        }
        "The new GAT Training module is now available" => "وحدة تدريب القدرات الجديدة متاحة الآن",

        // Other
        "Toggle Dark Mode" => "تبديل الوضع الداكن",
        "Change Language" => "تغيير اللغة",
        "Light" => "فاتح",
        "Dark" => "داكن",
        // Question bank
        "Topic" => "الموضوع",
        "New topic name" => "اسم الموضوع الجديد",
        "questions" => "أسئلة",
        "Question" => "السؤال",
        "New question" => "سؤال جديد",
        "Edit question" => "تعديل السؤال",
        "Subject" => "المادة",
        "Difficulty" => "الصعوبة",
        "Select a topic" => "اختر موضوعاً",
        "Image URL" => "رابط الصورة",
        "All difficulties" => "جميع المستويات",
        "All subjects" => "جميع المواد",
        "All banks" => "جميع البنوك",
        "Search questions" => "البحث في الأسئلة",
        "No questions match the current filters." => "لا توجد أسئلة تطابق عوامل التصفية الحالية.",
        "Are you sure you want to delete this question?" => "هل أنت متأكد من حذف هذا السؤال؟",
        "Edit" => "تعديل",
        "Delete" => "حذف",
        "Save" => "حفظ",
        // Validation
        "Please fill in all fields and select a correct answer." => "يرجى ملء جميع الحقول واختيار الإجابة الصحيحة.",
        "Exactly one answer must be marked correct." => "يجب تحديد إجابة صحيحة واحدة فقط.",
        "Topic name cannot be empty." => "لا يمكن أن يكون اسم الموضوع فارغاً.",
        "Please fill in all required fields." => "يرجى ملء جميع الحقول المطلوبة.",
        _ => return None,
    };
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_english_is_identity() {
        assert_eq!(translate(Language::En, "Students"), "Students");
        assert_eq!(translate(Language::En, "anything at all"), "anything at all");
    }

    #[test]
    fn test_arabic_lookup_and_fallback() {
        assert_eq!(translate(Language::Ar, "Students"), "الطلاب");
        assert_eq!(translate(Language::Ar, "Untranslated key"), "Untranslated key");
    }

    #[test]
    fn test_validation_messages_are_translated() {
        for error in [
            ValidationError::IncompleteQuestion,
            ValidationError::CorrectAnswerCount,
            ValidationError::EmptyTopicName,
        ] {
            let message = error.to_string();
            assert_ne!(translate(Language::Ar, &message), message);
            assert_eq!(translate(Language::En, &message), message);
        }
        assert_eq!(
            translate(Language::Ar, "Are you sure you want to delete this question?"),
            "هل أنت متأكد من حذف هذا السؤال؟"
        );
    }

    #[test]
    fn test_toggle_dark_mode_twice_restores_state() {
        let original = Preferences::default();
        let mut prefs = original;
        prefs.toggle_dark_mode();
        assert!(prefs.dark_mode);
        assert_eq!(prefs.root_class(), "portal dark");
        prefs.toggle_dark_mode();
        assert_eq!(prefs, original);
        assert_eq!(prefs.root_class(), "portal");
    }

    #[test]
    fn test_toggle_language_twice_restores_text() {
        let mut prefs = Preferences::default();
        let before = prefs.t("Logout").to_string();

        prefs.toggle_language();
        assert_eq!(prefs.t("Logout"), "تسجيل الخروج");
        assert!(prefs.is_rtl());
        assert_eq!(prefs.language.dir(), "rtl");

        prefs.toggle_language();
        assert_eq!(prefs.t("Logout"), before);
        assert_eq!(prefs.language.dir(), "ltr");
    }

    #[test]
    fn test_from_config() {
        let config = PortalConfig::default()
            .with_language(Language::Ar)
            .with_dark_mode(true);
        let prefs = Preferences::from_config(&config);
        assert!(prefs.dark_mode);
        assert_eq!(prefs.language, Language::Ar);
    }
}
