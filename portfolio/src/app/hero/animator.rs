use crate::domain::hero::{RoleList, Typewriter, TypewriterEvent, TypewriterSnapshot, TypewriterTimings};
use crate::ports::hero::{HeadlineFrame, HeadlinePort};
use crate::telemetry::SiteMetrics;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum TypewriterError {
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("typewriter task failed: {0}")]
    Task(String),
}

pub type TypewriterResult<T> = Result<T, TypewriterError>;

#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    pub roles: Vec<String>,
    pub timings: TypewriterTimings,
    pub start_index: usize,
    /// Stop on its own after this many passes over the role list.
    pub max_cycles: Option<u64>,
}

impl TypewriterConfig {
    pub fn new(roles: Vec<String>, timings: TypewriterTimings) -> Self {
        Self {
            roles,
            timings,
            start_index: 0,
            max_cycles: None,
        }
    }

    pub fn build(&self) -> TypewriterResult<Typewriter> {
        let roles = RoleList::new(self.roles.clone()).map_err(TypewriterError::Config)?;
        Ok(Typewriter::starting_at(roles, self.timings, self.start_index))
    }
}

/// Owned handle to a running headline animation.
///
/// Dropping the handle cancels the task; [`TypewriterHandle::stop`] also waits
/// for it, so nothing is published once `stop` returns.
pub struct TypewriterHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<TypewriterSnapshot>>,
    pending: Arc<AtomicUsize>,
}

impl TypewriterHandle {
    /// Timers currently armed by the task; never more than one.
    pub fn pending_timers(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub async fn stop(mut self) -> TypewriterResult<TypewriterSnapshot> {
        self.cancel.cancel();
        self.join_task().await
    }

    /// Waits for the animation to reach its cycle cap. Without a cap this
    /// only returns after cancellation through a cloned token.
    pub async fn wait(mut self) -> TypewriterResult<TypewriterSnapshot> {
        self.join_task().await
    }

    async fn join_task(&mut self) -> TypewriterResult<TypewriterSnapshot> {
        let task = self
            .task
            .take()
            .ok_or_else(|| TypewriterError::Task("typewriter already joined".into()))?;
        task.await.map_err(|err| TypewriterError::Task(err.to_string()))
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Counts itself in `pending` for as long as it lives.
struct ArmedTimer {
    pending: Arc<AtomicUsize>,
}

impl ArmedTimer {
    fn arm(pending: &Arc<AtomicUsize>) -> Self {
        pending.fetch_add(1, Ordering::SeqCst);
        Self {
            pending: Arc::clone(pending),
        }
    }
}

impl Drop for ArmedTimer {
    fn drop(&mut self) {
        self.pending.fetch_sub(1, Ordering::SeqCst);
    }
}

pub fn spawn_typewriter(
    config: TypewriterConfig,
    headline: Arc<dyn HeadlinePort>,
    metrics: Option<Arc<SiteMetrics>>,
) -> TypewriterResult<TypewriterHandle> {
    let typewriter = config.build()?;
    let cancel = CancellationToken::new();
    let pending = Arc::new(AtomicUsize::new(0));
    let task = tokio::spawn(run_typewriter(
        typewriter,
        config.max_cycles,
        headline,
        metrics,
        cancel.clone(),
        Arc::clone(&pending),
    ));
    Ok(TypewriterHandle {
        cancel,
        task: Some(task),
        pending,
    })
}

async fn run_typewriter(
    mut typewriter: Typewriter,
    max_cycles: Option<u64>,
    headline: Arc<dyn HeadlinePort>,
    metrics: Option<Arc<SiteMetrics>>,
    cancel: CancellationToken,
    pending: Arc<AtomicUsize>,
) -> TypewriterSnapshot {
    info!(
        roles = typewriter.roles().len(),
        start = typewriter.current_index(),
        "hero typewriter started"
    );
    headline.publish(&HeadlineFrame::capture(&typewriter));

    loop {
        if max_cycles.is_some_and(|max| typewriter.cycles_completed() >= max) {
            info!(cycles = typewriter.cycles_completed(), "hero typewriter reached cycle cap");
            break;
        }

        let delay = typewriter.next_delay();
        let timer = ArmedTimer::arm(&pending);
        let fired = tokio::select! {
            biased;
            _ = cancel.cancelled() => false,
            _ = time::sleep(delay) => true,
        };
        drop(timer);
        if !fired || cancel.is_cancelled() {
            debug!("hero typewriter cancelled");
            break;
        }

        let finished_role = typewriter.current_role().to_string();
        let event = typewriter.advance();
        if let TypewriterEvent::AdvancedRole { index } = &event {
            debug!(next = *index, "hero typewriter moved to next role");
            if let Some(metrics) = metrics.as_ref() {
                metrics.record_role_completed(&finished_role);
            }
        }
        if event.changes_frame() {
            headline.publish(&HeadlineFrame::capture(&typewriter));
        }
    }

    typewriter.snapshot()
}
