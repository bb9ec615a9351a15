use crate::image_classifier::interface::Classification;
use std::cmp::Ordering;

fn by_confidence_desc(a: &(usize, f32), b: &(usize, f32)) -> Ordering {
    b.1.total_cmp(&a.1)
}

/// Indices and scores of the `k` highest scores, highest first.
/// NaN scores never make the cut. Order among equal scores is unspecified.
pub fn top_k(scores: &[f32], k: usize) -> Vec<(usize, f32)> {
    if k == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, score)| !score.is_nan())
        .collect();

    if ranked.len() > k {
        ranked.select_nth_unstable_by(k - 1, by_confidence_desc);
        ranked.truncate(k);
    }
    ranked.sort_by(by_confidence_desc);
    ranked
}

pub fn top_k_classifications(scores: &[f32], labels: &[String], k: usize) -> Vec<Classification> {
    top_k(scores, k)
        .into_iter()
        .map(|(index, confidence)| Classification {
            label: labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("class {}", index)),
            confidence,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_k_highest_in_descending_order() {
        let scores = [0.1, 0.7, 0.05, 0.9, 0.3];

        assert_eq!(top_k(&scores, 3), vec![(3, 0.9), (1, 0.7), (4, 0.3)]);
    }

    #[test]
    fn test_fewer_scores_than_k() {
        let scores = [0.2, 0.4];

        assert_eq!(top_k(&scores, 3), vec![(1, 0.4), (0, 0.2)]);
    }

    #[test]
    fn test_zero_k_and_empty_input() {
        assert!(top_k(&[0.5], 0).is_empty());
        assert!(top_k(&[], 3).is_empty());
    }

    #[test]
    fn test_nan_scores_are_ignored() {
        let scores = [f32::NAN, 0.5, f32::NAN, 0.1];

        assert_eq!(top_k(&scores, 3), vec![(1, 0.5), (3, 0.1)]);
    }

    #[test]
    fn test_ties_keep_length_and_order() {
        let scores = [0.5, 0.5, 0.5, 0.9];

        let ranked = top_k(&scores, 2);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], (3, 0.9));
        assert_eq!(ranked[1].1, 0.5);
    }

    #[test]
    fn test_labels_fall_back_to_class_index() {
        let labels = vec!["cup".to_string()];

        let classifications = top_k_classifications(&[0.2, 0.8], &labels, 2);

        assert_eq!(classifications[0].label, "class 1");
        assert_eq!(classifications[1].label, "cup");
    }
}
