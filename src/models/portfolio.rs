#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Ai,
    Branding,
    Data,
    Web,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Ai,
        Category::Branding,
        Category::Data,
        Category::Web,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::All => "Todos",
            Category::Ai => "IA",
            Category::Branding => "Branding",
            Category::Data => "Dados",
            Category::Web => "Web",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub client: &'static str,
    pub category: Category,
    pub image: &'static str,
    pub description: &'static str,
}

pub const PROJECTS: [Project; 6] = [
    Project {
        id: 1,
        title: "Fintech Evolution",
        client: "NeoBank",
        category: Category::Ai,
        image: "https://picsum.photos/seed/p1/800/600",
        description: "Assistente virtual com 98% de precisão.",
    },
    Project {
        id: 2,
        title: "Rebranding Global",
        client: "EcoCorp",
        category: Category::Branding,
        image: "https://picsum.photos/seed/p2/800/600",
        description: "Identidade visual para 12 países.",
    },
    Project {
        id: 3,
        title: "Data Lake View",
        client: "RetailGiant",
        category: Category::Data,
        image: "https://picsum.photos/seed/p3/800/600",
        description: "Dashboard preditivo de vendas.",
    },
    Project {
        id: 4,
        title: "Immersive Commerce",
        client: "FashionBrand",
        category: Category::Web,
        image: "https://picsum.photos/seed/p4/800/600",
        description: "E-commerce 3D interativo.",
    },
    Project {
        id: 5,
        title: "Automated Marketing",
        client: "SaaS Co",
        category: Category::Ai,
        image: "https://picsum.photos/seed/p5/800/600",
        description: "Lead scoring automatizado.",
    },
    Project {
        id: 6,
        title: "Campaign Viral",
        client: "DrinkEnergy",
        category: Category::Branding,
        image: "https://picsum.photos/seed/p6/800/600",
        description: "Campanha com influencers IA.",
    },
];

/// Projects shown for `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: Category) -> Vec<&Project> {
    projects
        .iter()
        .filter(|project| filter == Category::All || project.category == filter)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_keeps_original_list() {
        let shown = filter_projects(&PROJECTS, Category::All);
        let ids: Vec<u32> = shown.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_matches_exactly() {
        for category in Category::ALL.into_iter().skip(1) {
            let shown = filter_projects(&PROJECTS, category);
            assert!(!shown.is_empty(), "{:?} has no projects", category);
            assert!(shown.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn ai_filter_preserves_order() {
        let ids: Vec<u32> = filter_projects(&PROJECTS, Category::Ai)
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(filter_projects(&[], Category::Web).is_empty());
    }
}
