use serde::{Deserialize, Serialize};

/// Which stage of the studio's workflow a portfolio image shows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Sketch,
    Cad,
    Final,
}

/// A portfolio gallery entry. Static content, defined at build time; the
/// only operation on it is client-side filtering by kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
    pub kind: ProjectKind,
}

impl ProjectEntry {
    fn new(
        id: &str,
        title: &str,
        category: &str,
        description: &str,
        image_url: &str,
        kind: ProjectKind,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            image_url: image_url.to_string(),
            kind,
        }
    }
}

/// The studio's portfolio as shipped with the site.
pub fn catalog() -> Vec<ProjectEntry> {
    vec![
        ProjectEntry::new(
            "1",
            "云端美术馆",
            "文化建筑",
            "流畅的曲线模拟云朵的形态。",
            "https://picsum.photos/seed/p1/600/600",
            ProjectKind::Sketch,
        ),
        ProjectEntry::new(
            "2",
            "静谧住宅",
            "住宅设计",
            "极简主义与自然光的完美契合。",
            "https://picsum.photos/seed/p2/600/600",
            ProjectKind::Cad,
        ),
        ProjectEntry::new(
            "3",
            "科技绿洲",
            "办公空间",
            "整合垂直绿化的生态办公。",
            "https://picsum.photos/seed/p3/600/600",
            ProjectKind::Final,
        ),
        ProjectEntry::new(
            "4",
            "历史重构",
            "城市更新",
            "旧工业遗址的现代转译。",
            "https://picsum.photos/seed/p4/600/600",
            ProjectKind::Sketch,
        ),
        ProjectEntry::new(
            "5",
            "光影教堂",
            "公共建筑",
            "神圣空间的几何秩序。",
            "https://picsum.photos/seed/p5/600/600",
            ProjectKind::Cad,
        ),
        ProjectEntry::new(
            "6",
            "山间书院",
            "教育设施",
            "顺应地形的山势建筑。",
            "https://picsum.photos/seed/p6/600/600",
            ProjectKind::Final,
        ),
    ]
}

/// `None` means the "all" tab. Entry order is preserved.
pub fn filter_by_kind(entries: &[ProjectEntry], kind: Option<ProjectKind>) -> Vec<&ProjectEntry> {
    entries
        .iter()
        .filter(|entry| kind.map_or(true, |k| entry.kind == k))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_two_entries_per_kind() {
        let entries = catalog();
        assert_eq!(entries.len(), 6);
        for kind in [ProjectKind::Sketch, ProjectKind::Cad, ProjectKind::Final] {
            assert_eq!(filter_by_kind(&entries, Some(kind)).len(), 2);
        }
    }

    #[test]
    fn all_filter_keeps_everything_in_order() {
        let entries = catalog();
        let all = filter_by_kind(&entries, None);
        assert_eq!(all.len(), entries.len());
        assert_eq!(all[0].id, "1");
        assert_eq!(all[5].id, "6");
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectKind::Sketch).unwrap(),
            "\"sketch\""
        );
        assert_eq!(
            serde_json::from_str::<ProjectKind>("\"cad\"").unwrap(),
            ProjectKind::Cad
        );
    }
}
