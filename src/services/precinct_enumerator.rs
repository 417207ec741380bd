//! 选区枚举服务 - 业务能力层
//!
//! 只负责"列出一个县的选区"，不关心后续流程

use crate::error::{AppError, AppResult, DecodeError};
use crate::infrastructure::LookupClient;
use crate::models::{decode_precinct_list, PrecinctDescriptor};
use tracing::debug;

/// 一个县的枚举结果
#[derive(Debug, Clone, Default)]
pub struct CountyPrecincts {
    pub county_id: u32,
    /// 已去掉占位项的选区，保持接口返回顺序
    pub precincts: Vec<PrecinctDescriptor>,
    /// 被丢弃的占位项数量
    pub placeholders: usize,
}

/// 选区枚举服务
///
/// 职责：
/// - 每个县发一次请求
/// - 把响应解析成强类型的 PrecinctDescriptor
/// - 丢弃 "<Select a Precinct>" 占位项
pub struct PrecinctEnumerator {
    list_url: String,
    county_count: u32,
}

impl PrecinctEnumerator {
    pub fn new(list_url: impl Into<String>, county_count: u32) -> Self {
        Self {
            list_url: list_url.into(),
            county_count,
        }
    }

    /// 列出县 `county_id` 的全部真实选区
    pub async fn enumerate(
        &self,
        client: &LookupClient,
        county_id: u32,
    ) -> AppResult<CountyPrecincts> {
        if county_id == 0 || county_id > self.county_count {
            return Err(AppError::CountyOutOfRange {
                county_id,
                max: self.county_count,
            });
        }

        let body = client
            .post_form(&self.list_url, &[("CountyId", county_id.to_string())])
            .await?;

        let descriptors =
            decode_precinct_list(&body).map_err(|source| DecodeError::InvalidPayload {
                url: self.list_url.clone(),
                source,
            })?;

        filter_precincts(&self.list_url, county_id, descriptors)
    }
}

/// 去掉占位项，并确认每个选区都属于请求的县
fn filter_precincts(
    url: &str,
    county_id: u32,
    descriptors: Vec<PrecinctDescriptor>,
) -> AppResult<CountyPrecincts> {
    let mut result = CountyPrecincts {
        county_id,
        ..Default::default()
    };

    for descriptor in descriptors {
        if descriptor.is_placeholder() {
            result.placeholders += 1;
            continue;
        }
        if descriptor.county_id != county_id {
            return Err(DecodeError::CountyMismatch {
                url: url.to_string(),
                expected: county_id,
                found: descriptor.county_id,
            }
            .into());
        }
        result.precincts.push(descriptor);
    }

    debug!(
        "县 {} 返回 {} 个选区，丢弃占位项 {} 个",
        county_id,
        result.precincts.len(),
        result.placeholders
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PLACEHOLDER_DESCRIPTION;

    fn descriptor(county_id: u32, label: &str, description: &str) -> PrecinctDescriptor {
        PrecinctDescriptor {
            county_id,
            precinct_label: label.to_string(),
            precinct_description: description.to_string(),
            polling_place_id: 1,
            polling_place_name: "Place".to_string(),
        }
    }

    #[test]
    fn test_placeholder_dropped_order_kept() {
        let input = vec![
            descriptor(3, "02", "Beta"),
            descriptor(0, "", PLACEHOLDER_DESCRIPTION),
            descriptor(3, "01", "Alpha"),
        ];

        let result = filter_precincts("http://x", 3, input).unwrap();
        let labels: Vec<&str> = result
            .precincts
            .iter()
            .map(|p| p.precinct_label.as_str())
            .collect();

        assert_eq!(labels, vec!["02", "01"]);
        assert_eq!(result.placeholders, 1);
    }

    #[test]
    fn test_county_mismatch_is_decode_error() {
        let input = vec![descriptor(4, "01", "Alpha")];
        let err = filter_precincts("http://x", 3, input).unwrap_err();
        assert!(matches!(
            err,
            AppError::Decode(DecodeError::CountyMismatch {
                expected: 3,
                found: 4,
                ..
            })
        ));
    }

    #[test]
    fn test_only_placeholder_yields_empty() {
        let input = vec![descriptor(0, "", PLACEHOLDER_DESCRIPTION)];
        let result = filter_precincts("http://x", 9, input).unwrap();
        assert!(result.precincts.is_empty());
        assert_eq!(result.placeholders, 1);
    }

    #[tokio::test]
    async fn test_county_out_of_range_rejected_before_request() {
        let config = crate::config::Config::default();
        let client = LookupClient::new(&config).unwrap();
        let enumerator = PrecinctEnumerator::new("http://127.0.0.1:9/unused", 100);

        let zero = enumerator.enumerate(&client, 0).await.unwrap_err();
        assert!(matches!(zero, AppError::CountyOutOfRange { county_id: 0, max: 100 }));

        let over = enumerator.enumerate(&client, 101).await.unwrap_err();
        assert!(matches!(over, AppError::CountyOutOfRange { county_id: 101, .. }));
    }
}
