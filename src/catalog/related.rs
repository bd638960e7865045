use crate::models::Product;

const RELATED_LIMIT: usize = 4;

/// Ranks the rest of the catalog by relevance to `subject` and returns
/// the top four. Ties keep catalog order (the sort is stable).
pub fn rank(catalog: &[Product], subject: &Product) -> Vec<Product> {
    let mut scored: Vec<(u8, &Product)> = catalog
        .iter()
        .filter(|p| p.id != subject.id)
        .map(|p| (relevance(p, subject), p))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored
        .into_iter()
        .take(RELATED_LIMIT)
        .map(|(_, p)| p.clone())
        .collect()
}

fn relevance(candidate: &Product, subject: &Product) -> u8 {
    let mut score = 0;
    if candidate.category == subject.category {
        score += 2;
    }
    if candidate.brand == subject.brand {
        score += 1;
    }
    score
}
