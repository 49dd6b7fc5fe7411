mod adapters;
mod app;
mod domain;
mod ports;
mod settings;
mod telemetry;

pub use adapters::contact::{
    compose_mailto_uri, EchoUrlOpener, HostedRelayDispatcher, MailtoDispatcher, RelayCredentials,
    SystemUrlOpener, DEFAULT_RELAY_ENDPOINT,
};
pub use adapters::hero::{TerminalHeadline, WatchHeadline};
pub use adapters::navigation::{InMemoryViewport, ScrollRecord};
pub use adapters::showcase::PlainTextRenderer;
pub use app::contact::{ContactService, ContactServiceError, SubmitOutcome};
pub use app::hero::{
    spawn_typewriter, TypewriterConfig, TypewriterError, TypewriterHandle, TypewriterResult,
};
pub use app::navigation::NavigationService;
pub use domain::contact::{ContactField, ContactFields, ContactForm, ContactSubmission, FormStatus};
pub use domain::hero::{
    Role, RoleList, Typewriter, TypewriterEvent, TypewriterPhase, TypewriterSnapshot,
    TypewriterTimings,
};
pub use domain::navigation::{HeaderTreatment, NavigationState, ScrollBehavior, SectionId};
pub use domain::showcase::Showcase;
pub use ports::contact::{
    ContactDispatchPort, DispatchError, DispatchReceipt, DispatchStrategy, UrlOpenerPort,
};
pub use ports::hero::{HeadlineFrame, HeadlinePort};
pub use ports::navigation::ViewportPort;
pub use settings::{
    default_site_path, load_site_config, ContactConfig, HeroConfig, ProfileConfig, ProjectConfig,
    SiteConfig, SkillConfig,
};
pub use telemetry::SiteMetrics;

use anyhow::{anyhow, bail, Context, Result as AnyResult};
use opentelemetry_sdk::metrics::SdkMeterProvider;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::signal::ctrl_c;
use tracing::{info, warn};

const SERVICE_NAME: &str = "portfolio";

#[derive(Clone, Debug, Default)]
pub struct Settings {
    /// Site content file; `None` means the user config dir or the built-in page.
    pub site_path: Option<PathBuf>,
    pub otlp_endpoint: Option<String>,
}

impl Settings {
    pub async fn site(&self) -> AnyResult<SiteConfig> {
        load_site_config(self.site_path.as_deref()).await
    }
}

struct Telemetry {
    metrics: Option<Arc<SiteMetrics>>,
    provider: Option<SdkMeterProvider>,
}

impl Telemetry {
    fn start(settings: &Settings) -> AnyResult<Self> {
        let Some(endpoint) = settings.otlp_endpoint.as_ref() else {
            return Ok(Self {
                metrics: None,
                provider: None,
            });
        };
        let (provider, metrics) = telemetry::init_metrics(Some(endpoint.clone()), SERVICE_NAME)?;
        Ok(Self {
            metrics: Some(Arc::new(metrics)),
            provider: Some(provider),
        })
    }

    fn metrics(&self) -> Option<Arc<SiteMetrics>> {
        self.metrics.clone()
    }

    fn shutdown(self) {
        if let Some(provider) = self.provider {
            if let Err(err) = telemetry::shutdown_metrics(provider) {
                warn!("Failed to flush telemetry: {err:#}");
            }
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HeroOptions {
    /// Stop after this many passes over the role list; run until Ctrl-C otherwise.
    pub cycles: Option<u64>,
    pub start_index: usize,
    pub hide_role: bool,
}

/// Animates the hero headline on the terminal.
pub async fn run_hero(settings: Settings, options: HeroOptions) -> AnyResult<TypewriterSnapshot> {
    let site = settings.site().await?;
    let telemetry = Telemetry::start(&settings)?;

    let mut headline = TerminalHeadline::new(site.hero.lead.clone());
    if options.hide_role {
        headline = headline.without_role();
    }
    let headline = Arc::new(headline);

    let mut config = site.hero.typewriter_config();
    config.start_index = options.start_index;
    config.max_cycles = options.cycles;
    let handle = spawn_typewriter(config, headline.clone(), telemetry.metrics())?;

    let token = handle.cancellation_token();
    let waiter = handle.wait();
    tokio::pin!(waiter);
    let snapshot = tokio::select! {
        snapshot = &mut waiter => snapshot?,
        _ = ctrl_c() => {
            info!("interrupt received, stopping hero typewriter");
            token.cancel();
            waiter.await?
        }
    };
    headline.finish();

    telemetry.shutdown();
    Ok(snapshot)
}

/// Validates and dispatches one contact submission with the configured strategy.
///
/// With `dry_run` the mail handoff prints the `mailto:` URI instead of
/// launching the mail client.
pub async fn submit_contact(
    settings: Settings,
    fields: ContactFields,
    dry_run: bool,
) -> AnyResult<SubmitOutcome> {
    let site = settings.site().await?;
    let telemetry = Telemetry::start(&settings)?;

    let opener: Arc<dyn UrlOpenerPort> = if dry_run {
        Arc::new(EchoUrlOpener)
    } else {
        Arc::new(SystemUrlOpener::new())
    };
    if dry_run && site.contact.strategy() == DispatchStrategy::HostedRelay {
        warn!("--dry-run only affects mail handoff; the relay request is sent as usual");
    }
    let dispatcher = site.contact.dispatcher(opener).map_err(|err| anyhow!(err))?;

    let service = ContactService::new(dispatcher, telemetry.metrics());
    service.fill(fields).await?;
    let outcome = service.submit().await;
    service.unmount();

    telemetry.shutdown();
    Ok(outcome?)
}

/// One scripted viewer interaction for [`navigate`].
#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    ScrollTo(SectionId),
    Click(SectionId),
    HireMe,
    ViewProjects,
    ToggleMenu,
    Scroll(f64),
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match value.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (value, None),
        };
        match (verb, arg) {
            ("goto", Some(section)) => Ok(NavAction::ScrollTo(section.parse()?)),
            ("click", Some(section)) => Ok(NavAction::Click(section.parse()?)),
            ("hire", None) => Ok(NavAction::HireMe),
            ("projects", None) => Ok(NavAction::ViewProjects),
            ("menu", None) => Ok(NavAction::ToggleMenu),
            ("scroll", Some(offset)) => offset
                .parse::<f64>()
                .map(NavAction::Scroll)
                .map_err(|err| format!("invalid scroll offset '{offset}': {err}")),
            _ => Err(format!(
                "unknown navigation action '{value}' (expected goto:<id>, click:<id>, hire, projects, menu, scroll:<px>)"
            )),
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavAction::ScrollTo(section) => write!(f, "goto:{section}"),
            NavAction::Click(section) => write!(f, "click:{section}"),
            NavAction::HireMe => write!(f, "hire"),
            NavAction::ViewProjects => write!(f, "projects"),
            NavAction::ToggleMenu => write!(f, "menu"),
            NavAction::Scroll(offset) => write!(f, "scroll:{offset}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavReport {
    pub scrolls: Vec<ScrollRecord>,
    pub header: HeaderTreatment,
    pub mobile_menu_open: bool,
    pub ignored: Vec<SectionId>,
}

/// Replays viewer actions against the four-section page and reports what the
/// viewport was asked to do.
pub fn navigate(settings: &Settings, actions: &[NavAction]) -> AnyResult<NavReport> {
    let telemetry = Telemetry::start(settings)?;
    let viewport = Arc::new(InMemoryViewport::page());
    let nav = NavigationService::new(viewport.clone(), telemetry.metrics());
    let mut ignored = Vec::new();

    for action in actions {
        let performed = match action {
            NavAction::ScrollTo(section) => nav.scroll_to(section),
            NavAction::Click(section) => nav.nav_click(section),
            NavAction::HireMe => nav.hire_me(),
            NavAction::ViewProjects => nav.view_projects(),
            NavAction::ToggleMenu => {
                nav.toggle_mobile_menu();
                true
            }
            NavAction::Scroll(offset) => {
                nav.on_scroll(*offset);
                true
            }
        };
        if !performed {
            if let NavAction::ScrollTo(section) | NavAction::Click(section) = action {
                ignored.push(section.clone());
            }
        }
    }

    let report = NavReport {
        scrolls: viewport.scrolls(),
        header: viewport.header(),
        mobile_menu_open: viewport.mobile_menu_open(),
        ignored,
    };
    telemetry.shutdown();
    Ok(report)
}

pub async fn render_showcase(settings: &Settings) -> AnyResult<String> {
    let site = settings.site().await?;
    let showcase = site.showcase().map_err(|err| anyhow!(err))?;
    Ok(PlainTextRenderer::new().render(&showcase))
}

/// Writes the built-in site content to `path` (or the default location) as a
/// starting point for editing. Refuses to overwrite an existing file.
pub async fn write_default_site(path: Option<&Path>) -> AnyResult<PathBuf> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => default_site_path().context("no user config directory on this platform")?,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let text = SiteConfig::default().to_toml()?;
    let mut file = match tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await
    {
        Ok(file) => file,
        Err(err) if err.kind() == std::io::ErrorKind::AlreadyExists => {
            bail!("{} already exists", path.display())
        }
        Err(err) => {
            return Err(anyhow::Error::new(err).context(format!("creating {}", path.display())))
        }
    };
    file.write_all(text.as_bytes())
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    file.flush()
        .await
        .with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "default site config written");
    Ok(path)
}
