pub mod conference;
pub mod dataset;
pub mod fake_feed;
pub mod http_client;
pub mod player_stats;
pub mod shooting;
pub mod shot_chart;
pub mod state;
pub mod team_stats;
