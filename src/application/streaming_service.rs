// Streaming dashboard service - Progressive loading, one message per dashboard section
use crate::application::dashboard_service::DashboardService;
use crate::domain::chart::ChartState;
use crate::domain::chart::radar::RadarChart;
use crate::domain::chart::series::SeriesChart;
use crate::domain::dashboard::{CurrentPanel, ForecastCard, StatGauge};
use futures::future::join_all;
use serde::Serialize;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Current,
    Stats,
    Radar,
    Week,
    Forecast,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Current,
        Section::Stats,
        Section::Radar,
        Section::Week,
        Section::Forecast,
    ];
}

/// Messages on the dashboard stream. The skeleton always comes first and
/// `Complete` always comes last; section messages arrive in any order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StreamMessage {
    Skeleton {
        city: String,
        sections: Vec<Section>,
    },
    Current {
        panel: CurrentPanel,
    },
    Stats {
        stats: Vec<StatGauge>,
    },
    Radar {
        chart: ChartState<RadarChart>,
    },
    Week {
        chart: ChartState<SeriesChart>,
    },
    Forecast {
        cards: Vec<ForecastCard>,
    },
    Failed {
        section: Section,
        reason: String,
    },
    #[serde(rename_all = "camelCase")]
    Complete {
        sections: usize,
        duration_ms: u64,
    },
}

#[derive(Clone)]
pub struct StreamingDashboardService {
    dashboards: DashboardService,
}

impl StreamingDashboardService {
    pub fn new(dashboards: DashboardService) -> Self {
        Self { dashboards }
    }

    pub async fn stream_dashboard(&self, city: &str) -> mpsc::Receiver<StreamMessage> {
        // Room for every message, so section tasks never wait on a slow reader
        let (tx, rx) = mpsc::channel(Section::ALL.len() + 3);
        let start_time = Instant::now();
        let city = city.trim().to_string();

        let skeleton = StreamMessage::Skeleton {
            city: city.clone(),
            sections: Section::ALL.to_vec(),
        };
        let _ = tx.send(skeleton).await;

        let handles: Vec<_> = Section::ALL
            .into_iter()
            .map(|section| {
                let tx = tx.clone();
                let dashboards = self.dashboards.clone();
                let city = city.clone();

                tokio::spawn(async move {
                    let msg = match Self::section_message(&dashboards, section, &city).await {
                        Ok(msg) => msg,
                        Err(e) => {
                            tracing::warn!("Section {:?} for {:?} failed: {:#}", section, city, e);
                            StreamMessage::Failed {
                                section,
                                reason: format!("{:#}", e),
                            }
                        }
                    };
                    let _ = tx.send(msg).await;
                })
            })
            .collect();

        tokio::spawn(async move {
            join_all(handles).await;

            let duration_ms = u64::try_from(start_time.elapsed().as_millis()).unwrap_or(u64::MAX);
            tracing::debug!("Dashboard stream for {} finished in {}ms", city, duration_ms);
            let complete = StreamMessage::Complete {
                sections: Section::ALL.len(),
                duration_ms,
            };
            let _ = tx.send(complete).await;
        });

        rx
    }

    async fn section_message(
        dashboards: &DashboardService,
        section: Section,
        city: &str,
    ) -> anyhow::Result<StreamMessage> {
        let provider = dashboards.provider();
        let msg = match section {
            Section::Current => {
                let current = provider.current(city).await?;
                StreamMessage::Current {
                    panel: CurrentPanel::from(&current),
                }
            }
            Section::Stats => {
                let current = provider.current(city).await?;
                StreamMessage::Stats {
                    stats: dashboards.build_stats(&current),
                }
            }
            Section::Radar => StreamMessage::Radar {
                chart: dashboards.radar_chart(city).await?,
            },
            Section::Week => StreamMessage::Week {
                chart: dashboards.week_chart(city).await?,
            },
            Section::Forecast => {
                let forecast = provider.forecast(city).await?;
                StreamMessage::Forecast {
                    cards: DashboardService::forecast_cards(&forecast),
                }
            }
        };
        Ok(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::fixture_provider::StaticWeatherProvider;
    use std::sync::Arc;
    use tokio_stream::StreamExt;
    use tokio_stream::wrappers::ReceiverStream;

    fn service() -> StreamingDashboardService {
        StreamingDashboardService::new(DashboardService::new(
            Arc::new(StaticWeatherProvider::builtin()),
            AppConfig::default(),
        ))
    }

    async fn collect(city: &str) -> Vec<StreamMessage> {
        let rx = service().stream_dashboard(city).await;
        ReceiverStream::new(rx).collect().await
    }

    #[tokio::test]
    async fn test_skeleton_first_complete_last() {
        let messages = collect("London").await;
        assert_eq!(messages.len(), 7);

        assert!(matches!(
            &messages[0],
            StreamMessage::Skeleton { city, sections } if city == "London" && sections.len() == 5
        ));
        assert!(matches!(
            messages.last(),
            Some(StreamMessage::Complete { sections: 5, .. })
        ));

        let sections = &messages[1..6];
        assert!(sections.iter().any(|m| matches!(
            m,
            StreamMessage::Current { panel } if panel.city == "London"
        )));
        assert!(sections.iter().any(|m| matches!(
            m,
            StreamMessage::Stats { stats } if stats.len() == 6
        )));
        assert!(sections.iter().any(|m| matches!(
            m,
            StreamMessage::Radar {
                chart: ChartState::Ready(_)
            }
        )));
        assert!(sections.iter().any(|m| matches!(
            m,
            StreamMessage::Week {
                chart: ChartState::Ready(_)
            }
        )));
        assert!(sections.iter().any(|m| matches!(
            m,
            StreamMessage::Forecast { cards } if cards.len() == 7
        )));
    }

    #[tokio::test]
    async fn test_failed_sections_still_complete() {
        let messages = collect("   ").await;
        assert_eq!(messages.len(), 7);

        let failed = messages
            .iter()
            .filter(|m| {
                matches!(m, StreamMessage::Failed { reason, .. } if reason.contains("unknown city"))
            })
            .count();
        assert_eq!(failed, 5);
        assert!(matches!(messages.last(), Some(StreamMessage::Complete { .. })));
    }

    #[test]
    fn test_message_json_shape() {
        let msg = StreamMessage::Complete {
            sections: 5,
            duration_ms: 12,
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "complete");
        assert_eq!(json["durationMs"], 12);

        let msg = StreamMessage::Failed {
            section: Section::Week,
            reason: "boom".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["type"], "failed");
        assert_eq!(json["section"], "week");
    }
}
