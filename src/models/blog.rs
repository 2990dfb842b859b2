use chrono::{Datelike, NaiveDate};

const MONTHS_PT_BR: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlogPost {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub category: &'static str,
    pub published: NaiveDate,
    pub image: &'static str,
}

struct RawPost {
    id: u32,
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    published: &'static str,
    image: &'static str,
}

const RAW_POSTS: [RawPost; 3] = [
    RawPost {
        id: 2,
        title: "Storytelling na era dos dados",
        excerpt: "Usando métricas para criar narrativas que realmente engajam e convertem.",
        category: "Marketing",
        published: "2026-09-05",
        image: "https://picsum.photos/seed/blog2/800/400",
    },
    RawPost {
        id: 1,
        title: "O futuro da IA é híbrido: humanos e máquinas",
        excerpt: "Como a colaboração entre inteligência artificial e criatividade humana está redefinindo o mercado.",
        category: "Inteligência Artificial",
        published: "2026-10-12",
        image: "https://picsum.photos/seed/blog1/800/400",
    },
    RawPost {
        id: 3,
        title: "A ascensão das marcas ecossistêmicas",
        excerpt: "Por que empresas que funcionam como plataformas vivas crescem 3x mais rápido.",
        category: "Negócios",
        published: "2026-08-28",
        image: "https://picsum.photos/seed/blog3/800/400",
    },
];

/// Published posts, newest first. Entries with an unparseable date are
/// skipped and logged.
pub fn posts() -> Vec<BlogPost> {
    let mut posts: Vec<BlogPost> = RAW_POSTS
        .iter()
        .filter_map(|raw| match NaiveDate::parse_from_str(raw.published, "%Y-%m-%d") {
            Ok(published) => Some(BlogPost {
                id: raw.id,
                title: raw.title,
                excerpt: raw.excerpt,
                category: raw.category,
                published,
                image: raw.image,
            }),
            Err(err) => {
                log::warn!("skipping post {}: bad date {:?}: {}", raw.id, raw.published, err);
                None
            }
        })
        .collect();
    posts.sort_by(|a, b| b.published.cmp(&a.published));
    posts
}

/// `12 Out 2026` style date.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_PT_BR[date.month0() as usize],
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_portuguese_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 12).unwrap();
        assert_eq!(format_date(date), "12 Out 2026");

        let date = NaiveDate::from_ymd_opt(2026, 9, 5).unwrap();
        assert_eq!(format_date(date), "05 Set 2026");
    }

    #[test]
    fn posts_are_newest_first() {
        let ids: Vec<u32> = posts().iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn every_post_parses() {
        assert_eq!(posts().len(), RAW_POSTS.len());
    }
}
