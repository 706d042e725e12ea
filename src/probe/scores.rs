use crate::probe::error::ProbeError;

pub const SCORE_PAIR_LEN: usize = 8;

/// Decode `data` as consecutive little-endian `(u32, u32)` pairs.
pub fn parse_scores(data: &[u8]) -> Result<Vec<(u32, u32)>, ProbeError> {
    if data.len() % SCORE_PAIR_LEN != 0 {
        return Err(ProbeError::ScoreAlignment { len: data.len() });
    }
    let scores = data
        .chunks_exact(SCORE_PAIR_LEN)
        .map(|pair| {
            let a = u32::from_le_bytes([pair[0], pair[1], pair[2], pair[3]]);
            let b = u32::from_le_bytes([pair[4], pair[5], pair[6], pair[7]]);
            (a, b)
        })
        .collect();
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(pairs: &[(u32, u32)]) -> Vec<u8> {
        let mut v = Vec::new();
        for (a, b) in pairs {
            v.extend_from_slice(&a.to_le_bytes());
            v.extend_from_slice(&b.to_le_bytes());
        }
        v
    }

    #[test]
    fn decodes_pairs_in_order() {
        let data = encode(&[(1, 2), (0xdead_beef, 0), (u32::MAX, 7)]);
        assert_eq!(
            parse_scores(&data).unwrap(),
            vec![(1, 2), (0xdead_beef, 0), (u32::MAX, 7)]
        );
    }

    #[test]
    fn empty_input_has_no_scores() {
        assert!(parse_scores(&[]).unwrap().is_empty());
    }

    #[test]
    fn ragged_input_is_rejected() {
        let mut data = encode(&[(1, 2)]);
        data.push(0);
        let err = parse_scores(&data).unwrap_err();
        assert!(matches!(err, ProbeError::ScoreAlignment { len: 9 }));
        assert!(err.to_string().contains("pairs of 32 bit integers"));
    }
}
