//! List query pipeline: filter by a text column, sort, then page.
//!
//! A [`ListQuery`] is a plain value describing the three steps. It has two interpreters:
//! [`ListQuery::apply_to_select`] translates it into SQL on a SeaORM `Select`, and
//! [`ListQuery::apply`] runs it over rows already in memory. Both keep the order
//! filter -> sort -> page; paging an unsorted set would return arbitrary rows.

use std::cmp::Ordering;

use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select,
};

/// Fixed number of rows per page.
pub const PAGE_SIZE: u64 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Only `desc_key` (e.g. `"name_desc"`) flips the order; unknown keys keep the default.
    pub fn from_key(key: Option<&str>, desc_key: &str) -> Self {
        match key {
            Some(k) if k == desc_key => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }
}

/// Rows that can go through the in-memory interpreter.
pub trait Listable {
    /// Column used for both the search filter and the sort.
    fn list_key(&self) -> &str;
    fn list_id(&self) -> i32;
}

impl Listable for models::publisher::Model {
    fn list_key(&self) -> &str { &self.name }
    fn list_id(&self) -> i32 { self.id }
}

impl Listable for models::book::Model {
    fn list_key(&self) -> &str { &self.title }
    fn list_id(&self) -> i32 { self.id }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring; `None` keeps every row.
    pub search: Option<String>,
    pub sort: SortOrder,
    /// 1-based page index
    pub page: u64,
}

impl Default for ListQuery {
    fn default() -> Self { Self { search: None, sort: SortOrder::Ascending, page: 1 } }
}

impl ListQuery {
    /// Build from raw request parameters. Empty search strings are ignored and a
    /// missing or zero page index means the first page.
    pub fn new(sort_by: Option<&str>, search: Option<&str>, page_index: Option<u64>, desc_key: &str) -> Self {
        let search = search.filter(|s| !s.is_empty()).map(str::to_string);
        let page = match page_index {
            None | Some(0) => 1,
            Some(p) => p,
        };
        Self { search, sort: SortOrder::from_key(sort_by, desc_key), page }
    }

    /// 0-based page index as used by SeaORM's paginator
    pub fn page_index0(&self) -> u64 { self.page.saturating_sub(1) }

    /// Row offset of the requested page. `None` when it cannot be expressed as an SQL
    /// offset (above `i64::MAX`); such a page lies past any table and is empty.
    pub fn offset(&self) -> Option<u64> {
        self.page_index0()
            .checked_mul(PAGE_SIZE)
            .filter(|off| *off <= i64::MAX as u64)
    }

    /// Case folding is ASCII-only so the result matches SQLite's `LOWER`.
    pub fn matches(&self, text: &str) -> bool {
        match &self.search {
            None => true,
            Some(s) => text.to_ascii_lowercase().contains(&s.to_ascii_lowercase()),
        }
    }

    fn compare<T: Listable>(&self, a: &T, b: &T) -> Ordering {
        let by_key = match self.sort {
            SortOrder::Ascending => a.list_key().cmp(b.list_key()),
            SortOrder::Descending => b.list_key().cmp(a.list_key()),
        };
        by_key.then_with(|| a.list_id().cmp(&b.list_id()))
    }

    /// In-memory interpreter.
    pub fn apply<T: Listable>(&self, rows: impl IntoIterator<Item = T>) -> Vec<T> {
        let Some(offset) = self.offset().and_then(|off| usize::try_from(off).ok()) else {
            return Vec::new();
        };
        let mut kept: Vec<T> = rows.into_iter().filter(|r| self.matches(r.list_key())).collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept.into_iter()
            .skip(offset)
            .take(PAGE_SIZE as usize)
            .collect()
    }

    /// SQL interpreter: adds the filter and ordering to `select`. Paging is left to
    /// the caller's paginator so it can run against any connection.
    pub fn apply_to_select<E, C>(&self, select: Select<E>, text_col: C, id_col: C) -> Select<E>
    where
        E: EntityTrait,
        C: ColumnTrait,
    {
        let mut select = select;
        if let Some(s) = &self.search {
            let pattern = format!("%{}%", escape_like(&s.to_ascii_lowercase()));
            select = select.filter(
                Expr::expr(Func::lower(Expr::col(text_col))).like(LikeExpr::new(pattern).escape('\\')),
            );
        }
        select = match self.sort {
            SortOrder::Ascending => select.order_by_asc(text_col),
            SortOrder::Descending => select.order_by_desc(text_col),
        };
        select.order_by_asc(id_col)
    }
}

fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::publisher;
    use sea_orm::{DbBackend, QueryTrait};

    fn seeded() -> Vec<publisher::Model> {
        (1..=6)
            .map(|i| publisher::Model { id: i, name: format!("Publisher {}", i) })
            .collect()
    }

    fn names(rows: &[publisher::Model]) -> Vec<&str> {
        rows.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn name_desc_pages_through_seeded_publishers() {
        let q1 = ListQuery::new(Some("name_desc"), Some("Publisher"), Some(1), "name_desc");
        let page1 = q1.apply(seeded());
        assert_eq!(names(&page1), ["Publisher 6", "Publisher 5", "Publisher 4", "Publisher 3", "Publisher 2"]);
        assert_eq!(page1[0].id, 6);

        let q2 = ListQuery { page: 2, ..q1.clone() };
        let page2 = q2.apply(seeded());
        assert_eq!(names(&page2), ["Publisher 1"]);
        assert_eq!(page2[0].id, 1);

        let q3 = ListQuery { page: 3, ..q1 };
        assert!(q3.apply(seeded()).is_empty());
    }

    #[test]
    fn unknown_sort_key_orders_ascending() {
        let q = ListQuery::new(Some("whatever"), None, None, "name_desc");
        assert_eq!(q.sort, SortOrder::Ascending);
        let page = q.apply(seeded());
        assert_eq!(page.first().map(|p| p.id), Some(1));
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let mut rows = seeded();
        rows.push(publisher::Model { id: 7, name: "Orbit".into() });
        let q = ListQuery::new(None, Some("publisher 3"), None, "name_desc");
        assert_eq!(names(&q.apply(rows.clone())), ["Publisher 3"]);

        let all = ListQuery::new(None, Some(""), None, "name_desc");
        assert_eq!(all.search, None);
        let q = ListQuery::new(None, Some("RBI"), None, "name_desc");
        assert_eq!(names(&q.apply(rows)), ["Orbit"]);
    }

    #[test]
    fn zero_or_missing_page_is_first_page() {
        assert_eq!(ListQuery::new(None, None, Some(0), "name_desc").page, 1);
        assert_eq!(ListQuery::new(None, None, None, "name_desc").offset(), Some(0));
        assert_eq!(ListQuery::new(None, None, Some(3), "name_desc").offset(), Some(10));
    }

    #[test]
    fn huge_page_index_is_an_empty_page() {
        let max = ListQuery::new(None, None, Some(u64::MAX), "name_desc");
        assert_eq!(max.offset(), None);
        assert!(max.apply(seeded()).is_empty());

        // multiplies without overflow but does not fit an SQL offset
        let beyond_i64 = ListQuery::new(None, None, Some(2_305_843_009_213_693_952), "name_desc");
        assert_eq!(beyond_i64.offset(), None);

        let last_bindable = ListQuery::new(None, None, Some(i64::MAX as u64 / PAGE_SIZE + 1), "name_desc");
        assert!(last_bindable.offset().is_some());
        assert!(last_bindable.apply(seeded()).is_empty());
    }

    #[test]
    fn case_folding_is_ascii_only() {
        let rows = vec![
            publisher::Model { id: 1, name: "Éditions Gallimard".into() },
            publisher::Model { id: 2, name: "ORBIT".into() },
        ];
        let q = ListQuery::new(None, Some("gallimard"), None, "name_desc");
        assert_eq!(names(&q.apply(rows.clone())), ["Éditions Gallimard"]);
        let q = ListQuery::new(None, Some("éditions"), None, "name_desc");
        assert!(q.apply(rows.clone()).is_empty());
        let q = ListQuery::new(None, Some("orb"), None, "name_desc");
        assert_eq!(names(&q.apply(rows)), ["ORBIT"]);
    }

    #[test]
    fn equal_keys_are_ordered_by_id() {
        let rows = vec![
            publisher::Model { id: 3, name: "Same".into() },
            publisher::Model { id: 1, name: "Same".into() },
            publisher::Model { id: 2, name: "Same".into() },
        ];
        let q = ListQuery::new(Some("name_desc"), None, None, "name_desc");
        let ids: Vec<i32> = q.apply(rows).iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn select_gets_filter_and_ordering() {
        let q = ListQuery::new(Some("name_desc"), Some("Pub"), Some(2), "name_desc");
        let select = q.apply_to_select(publisher::Entity::find(), publisher::Column::Name, publisher::Column::Id);
        let sql = select.build(DbBackend::Postgres).to_string();
        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("ORDER BY"), "{sql}");
        assert!(sql.contains("DESC"), "{sql}");
        assert!(sql.to_lowercase().contains("%pub%"), "{sql}");
    }
}
