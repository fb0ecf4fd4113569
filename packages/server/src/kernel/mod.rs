//! Kernel module - server infrastructure and external-service adapters.

pub mod interviews;

pub use interviews::{
    InterviewHit, InterviewMap, InterviewSearcher, NoopInterviewSearcher,
    YouTubeInterviewSearcher,
};
