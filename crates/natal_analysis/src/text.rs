//! Localized summary sentences and the disclaimer.

use natal_chart::Element;

use crate::career::CareerField;
use crate::element::element_profile;
use crate::locale::Locale;

/// Fixed notice shown alongside every interpretation.
pub const fn disclaimer(locale: Locale) -> &'static str {
    match locale {
        Locale::English => {
            "This analysis is produced by a rule system working from the geometry of the \
             natal chart. It uses no AI and makes no predictions. Results are for reference only."
        }
        Locale::Vietnamese => {
            "Phân tích này được xây dựng từ hệ thống quy tắc dựa trên dữ liệu hình học của bản đồ sao. \
             Không sử dụng AI và không mang tính dự đoán. Kết quả chỉ mang tính tham khảo."
        }
    }
}

pub(crate) fn personality_summary(dominant: Element, secondary: Element, locale: Locale) -> String {
    let dom = element_profile(dominant, locale);
    let sec = element_profile(secondary, locale);
    match locale {
        Locale::English => format!(
            "Your chart stands out for {} and {}. The {} element dominates, \
             showing a tendency to be {} and {}.",
            dom.description, sec.description, dom.label, dom.traits[0], dom.traits[1]
        ),
        Locale::Vietnamese => format!(
            "Bản đồ sao cho thấy bạn nổi bật về {} và {}. Nguyên tố {} chiếm ưu thế, \
             thể hiện xu hướng {} và {} trong tính cách của bạn.",
            dom.description, sec.description, dom.label, dom.traits[0], dom.traits[1]
        ),
    }
}

pub(crate) fn career_summary(fields: &[CareerField], mc_element: Element, locale: Locale) -> String {
    let top: Vec<&str> = fields.iter().take(3).map(|f| f.label(locale)).collect();
    let top = top.join(", ");
    let mc = element_profile(mc_element, locale);
    match locale {
        Locale::English => format!(
            "Your chart points toward career fields such as {top}. With the MC in the {} element, \
             you can do well in work that calls for being {} and {}.",
            mc.label, mc.traits[0], mc.traits[1]
        ),
        Locale::Vietnamese => format!(
            "Biểu đồ cho thấy xu hướng nghề nghiệp phù hợp với các lĩnh vực như {top}. \
             Với MC ở cung {}, bạn có thể phát triển tốt trong các công việc đòi hỏi {} và {}.",
            mc.label, mc.traits[0], mc.traits[1]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vietnamese_disclaimer_text() {
        assert_eq!(
            disclaimer(Locale::Vietnamese),
            "Phân tích này được xây dựng từ hệ thống quy tắc dựa trên dữ liệu hình học của bản đồ sao. \
             Không sử dụng AI và không mang tính dự đoán. Kết quả chỉ mang tính tham khảo."
        );
        assert!(disclaimer(Locale::English).ends_with("for reference only."));
    }

    #[test]
    fn vietnamese_personality_sentence() {
        let s = personality_summary(Element::Fire, Element::Water, Locale::Vietnamese);
        assert_eq!(
            s,
            "Bản đồ sao cho thấy bạn nổi bật về năng lượng mạnh mẽ và tinh thần lãnh đạo và \
             trực giác sâu sắc và sự thấu hiểu. Nguyên tố Hỏa chiếm ưu thế, thể hiện xu hướng \
             chủ động và nhiệt huyết trong tính cách của bạn."
        );
    }

    #[test]
    fn career_sentence_lists_top_three() {
        let fields = [
            CareerField::Technology,
            CareerField::Education,
            CareerField::Media,
            CareerField::Marketing,
        ];
        let s = career_summary(&fields, Element::Air, Locale::English);
        assert!(s.contains("technology, education, media."));
        assert!(!s.contains("marketing"));
        assert!(s.contains("MC in the Air element"));
    }
}
