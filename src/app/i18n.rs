use crate::utils::error::{Result, TravelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
    Ar,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Ar];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn landing(&self) -> &'static LandingText {
        match self {
            Language::En => &LANDING_EN,
            Language::Fr => &LANDING_FR,
            Language::Ar => &LANDING_AR,
        }
    }

    pub fn food(&self) -> &'static FoodText {
        match self {
            Language::En => &FOOD_EN,
            Language::Fr => &FOOD_FR,
            Language::Ar => &FOOD_AR,
        }
    }

    pub fn location(&self) -> &'static LocationText {
        match self {
            Language::En => &LOCATION_EN,
            Language::Fr => &LOCATION_FR,
            Language::Ar => &LOCATION_AR,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = TravelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "ar" => Ok(Language::Ar),
            other => Err(TravelError::InvalidConfigValueError {
                field: "ui.language".to_string(),
                value: other.to_string(),
                reason: "Supported languages: en, fr, ar".to_string(),
            }),
        }
    }
}

#[derive(Debug)]
pub struct LandingText {
    pub welcome: &'static str,
    pub subtitle: &'static str,
    pub talk: &'static str,
    pub order: &'static str,
}

#[derive(Debug)]
pub struct FoodText {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub check_menu: &'static str,
    pub hide_menu: &'static str,
    pub name_placeholder: &'static str,
    pub notes_placeholder: &'static str,
    pub send_order: &'static str,
    pub home: &'static str,
    /// `{restaurant}` is replaced by the restaurant name.
    pub order_sent: &'static str,
}

impl FoodText {
    pub fn order_sent_for(&self, restaurant: &str) -> String {
        self.order_sent.replace("{restaurant}", restaurant)
    }
}

#[derive(Debug)]
pub struct LocationText {
    pub your_position: &'static str,
    pub distance: &'static str,
    pub eta: &'static str,
    pub unresolved: &'static str,
    pub unavailable: &'static str,
    pub waiting_for_position: &'static str,
}

pub const FOOTER: &str = "© 2025 ALI — CTM Inspired";

static LANDING_EN: LandingText = LandingText {
    welcome: "Welcome to ALI",
    subtitle: "Your travel assistant for CTM - Scan, Chat, and Order.",
    talk: "Talk with Ali (CTM AI Assistant)",
    order: "Order Food",
};

static LANDING_FR: LandingText = LandingText {
    welcome: "Bienvenue sur ALI",
    subtitle: "Votre assistant de voyage pour CTM - Scannez, discutez et commandez.",
    talk: "Parlez avec Ali (Assistant IA CTM)",
    order: "Commander de la nourriture",
};

static LANDING_AR: LandingText = LandingText {
    welcome: "مرحبًا بك في ALI",
    subtitle: "مساعدك في السفر لـ CTM - مسح، محادثة، وطلب.",
    talk: "تحدث مع علي (مساعد الذكاء الاصطناعي CTM)",
    order: "اطلب الطعام",
};

static FOOD_EN: FoodText = FoodText {
    title: "Restaurants Near You",
    subtitle: "Choose a restaurant or check the menu and place your order.",
    check_menu: "Check Menu",
    hide_menu: "Hide Menu",
    name_placeholder: "Your Name…",
    notes_placeholder: "Add notes / changes…",
    send_order: "Send Order",
    home: "Home",
    order_sent: "Order sent for {restaurant}! (frontend only)",
};

static FOOD_FR: FoodText = FoodText {
    title: "Restaurants Près de Chez Vous",
    subtitle: "Choisis un restaurant ou consulte le menu et passe ta commande.",
    check_menu: "Voir le menu",
    hide_menu: "Cacher le menu",
    name_placeholder: "Votre nom…",
    notes_placeholder: "Ajouter des remarques / modifications…",
    send_order: "Envoyer la commande",
    home: "Accueil",
    order_sent: "Commande envoyée pour {restaurant} ! (démo uniquement)",
};

static FOOD_AR: FoodText = FoodText {
    title: "المطاعم القريبة منك",
    subtitle: "اختر مطعم أو شاهد قائمة الطعام واطلب طلبك.",
    check_menu: "عرض القائمة",
    hide_menu: "إخفاء القائمة",
    name_placeholder: "اسمك…",
    notes_placeholder: "أضف ملاحظات / تغييرات…",
    send_order: "إرسال الطلب",
    home: "الرئيسية",
    order_sent: "تم إرسال الطلب إلى {restaurant}! (تجريبي فقط)",
};

static LOCATION_EN: LocationText = LocationText {
    your_position: "Your position",
    distance: "Distance",
    eta: "Estimated travel time",
    unresolved: "No place found with that name",
    unavailable: "Lookup unavailable, please try again",
    waiting_for_position: "Waiting for your position…",
};

static LOCATION_FR: LocationText = LocationText {
    your_position: "Votre position",
    distance: "Distance",
    eta: "Durée estimée du trajet",
    unresolved: "Aucun lieu trouvé avec ce nom",
    unavailable: "Recherche indisponible, veuillez réessayer",
    waiting_for_position: "En attente de votre position…",
};

static LOCATION_AR: LocationText = LocationText {
    your_position: "موقعك",
    distance: "المسافة",
    eta: "مدة السفر المتوقعة",
    unresolved: "لم يتم العثور على مكان بهذا الاسم",
    unavailable: "البحث غير متاح، يرجى المحاولة مرة أخرى",
    waiting_for_position: "في انتظار موقعك…",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!(" fr ".parse::<Language>().unwrap(), Language::Fr);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Ar);
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_every_language_has_all_texts() {
        for lang in Language::ALL {
            assert!(!lang.landing().welcome.is_empty());
            assert!(!lang.food().send_order.is_empty());
            assert!(lang.food().order_sent.contains("{restaurant}"), "{}", lang);
            assert!(!lang.location().distance.is_empty());
        }
    }

    #[test]
    fn test_order_sent_template() {
        assert_eq!(
            Language::En.food().order_sent_for("Dar Tanjia"),
            "Order sent for Dar Tanjia! (frontend only)"
        );
    }
}
