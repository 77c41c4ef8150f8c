use ayahsearch_common::{AyahSearchError, Result};

/// One nearest-neighbor hit
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Verse id (position in the corpus)
    pub id: usize,

    /// Squared Euclidean distance to the query; lower is closer
    pub distance: f32,
}

/// Exact nearest-neighbor index over fixed-dimension embeddings
///
/// Built once at startup, read-only afterwards. Search is a brute-force
/// squared-L2 scan; the corpus is small enough that nothing sub-linear
/// is needed, and exactness keeps ranking deterministic.
#[derive(Debug)]
pub struct VectorIndex {
    vectors: Vec<Vec<f32>>,
    dim: usize,
}

impl VectorIndex {
    /// Build the index from position-aligned embedding vectors
    ///
    /// The vector at position `i` belongs to the verse with id `i`.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dim = match vectors.first() {
            Some(first) => first.len(),
            None => return Err(AyahSearchError::EmptyIndex),
        };

        for vector in &vectors {
            if vector.len() != dim {
                return Err(AyahSearchError::DimensionMismatch {
                    expected: dim,
                    actual: vector.len(),
                });
            }
        }

        tracing::info!(
            "Vector index built - {} vectors, dimension {}",
            vectors.len(),
            dim
        );
        Ok(Self { vectors, dim })
    }

    /// Embedding dimension D
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of indexed vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Find the `k` nearest vectors to `query`
    ///
    /// Results are ordered by ascending distance; equal distances are
    /// broken by ascending id so repeated searches always agree.
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<SearchHit>> {
        if query.len() != self.dim {
            return Err(AyahSearchError::DimensionMismatch {
                expected: self.dim,
                actual: query.len(),
            });
        }
        if k == 0 {
            return Err(AyahSearchError::invalid_input("k must be at least 1"));
        }

        let mut hits: Vec<SearchHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| SearchHit {
                id,
                distance: squared_l2(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| {
            a.distance
                .total_cmp(&b.distance)
                .then_with(|| a.id.cmp(&b.id))
        });
        hits.truncate(k);

        Ok(hits)
    }
}

/// Squared Euclidean distance between two equal-length vectors
fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> VectorIndex {
        // ids 0..3 at increasing distance from the origin
        VectorIndex::build(vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![2.0, 0.0],
            vec![3.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_build_empty_fails() {
        let err = VectorIndex::build(vec![]).unwrap_err();
        assert!(matches!(err, AyahSearchError::EmptyIndex));
    }

    #[test]
    fn test_build_ragged_dimensions_fail() {
        let err = VectorIndex::build(vec![vec![1.0, 2.0], vec![1.0]]).unwrap_err();
        assert!(matches!(
            err,
            AyahSearchError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_search_orders_by_distance() {
        let index = sample_index();
        let hits = index.search(&[2.1, 0.0], 3).unwrap();
        let ids: Vec<usize> = hits.iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
        assert!(hits[0].distance <= hits[1].distance);
        assert!(hits[1].distance <= hits[2].distance);
    }

    #[test]
    fn test_search_truncates_to_k() {
        let index = sample_index();
        assert_eq!(index.search(&[0.0, 0.0], 2).unwrap().len(), 2);
        // k larger than the corpus returns everything
        assert_eq!(index.search(&[0.0, 0.0], 100).unwrap().len(), 4);
    }

    #[test]
    fn test_search_dimension_mismatch() {
        let index = sample_index();
        let err = index.search(&[1.0, 2.0, 3.0], 5).unwrap_err();
        assert!(matches!(
            err,
            AyahSearchError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_search_rejects_zero_k() {
        let index = sample_index();
        assert!(index.search(&[0.0, 0.0], 0).is_err());
    }

    #[test]
    fn test_equal_distances_break_ties_by_id() {
        // ids 1 and 2 are equidistant from the query point
        let index = VectorIndex::build(vec![
            vec![5.0, 0.0],
            vec![1.0, 0.0],
            vec![-1.0, 0.0],
            vec![0.0, 1.0],
        ])
        .unwrap();

        let hits = index.search(&[0.0, 0.0], 4).unwrap();
        assert_eq!(hits[0].id, 1);
        assert_eq!(hits[1].id, 2);
        assert_eq!(hits[0].distance, hits[1].distance);
        // id 3 is also at distance 1, so it sorts after 1 and 2
        assert_eq!(hits[2].id, 3);
        assert_eq!(hits[3].id, 0);
    }

    #[test]
    fn test_search_is_deterministic() {
        let index = sample_index();
        let first = index.search(&[1.4, 0.3], 4).unwrap();
        for _ in 0..10 {
            assert_eq!(index.search(&[1.4, 0.3], 4).unwrap(), first);
        }
    }

    #[test]
    fn test_squared_l2() {
        assert_eq!(squared_l2(&[0.0, 0.0], &[3.0, 4.0]), 25.0);
        assert_eq!(squared_l2(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
    }
}
