//! Template engine module for rendering the weather block markup
//!
//! Uses the Tera templating engine with embedded, compile-time templates.
//! One template per view state keeps the markup identical between the
//! editor preview and static page output: both paths render through
//! [`TemplateEngine::render_block`].

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::BlockRendererPort;
use application::view::{BlockView, WeatherView};
use tera::{Context, Tera};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const WEATHER_BLOCK: &str = r#"<section class="weather-block">
	<header>
		<h2>{{ name }}, <span>{{ region }}</span></h2>
	</header>
	<div class="today">
		<div class="current-conditions">
			<div class="icon">
				<img src="{{ icon }}" alt="{{ condition }}" />
			</div>
			<div class="weather-data">
				<p class="current-temp">{{ temperature }}&deg;<span>{{ temperature_unit }}</span></p>
				<p class="feels-like">Feels like {{ feels_like }}&deg;<span>{{ temperature_unit }}</span></p>
			</div>
			<div class="weather-meta">
				<p>Precipitation: {{ chance_of_rain }}%</p>
				<p>Humidity: {{ humidity }}%</p>
				<p>Wind: {{ wind_speed }}{{ wind_unit }}</p>
			</div>
			<div class="weather-datetime">
				<p class="last-updated-date">{{ updated_date }}</p>
				<p class="last-updated-time">{{ updated_time }}</p>
				<p>{{ condition }}</p>
			</div>
		</div>
	</div>
	{%- if hourly %}
	<div class="forecast">
		<h3>Hourly</h3>
		<ul>
		{%- for hour in hourly %}
			<li>
				<p class="temp">{{ hour.temperature }}&deg;<span>{{ temperature_unit }}</span></p>
				<img src="{{ hour.icon }}" alt="{{ hour.condition }}" />
				<p>{{ hour.time }}</p>
			</li>
		{%- endfor %}
		</ul>
	</div>
	{%- endif %}
</section>
"#;

    pub const MISSING_LOCATION: &str =
        r#"<div class="weather-block notice">Location is required.</div>
"#;

    pub const LOADING: &str = r#"<div class="weather-block loading">Loading weather&hellip;</div>
"#;

    pub const ERROR: &str = r#"<div class="weather-block error">{{ message }}</div>
"#;

    pub const UNAVAILABLE: &str =
        r"<p>Sorry, something went wrong with the request. Please try again later.</p>
";
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template("weather/block.html", embedded::WEATHER_BLOCK)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("weather/missing_location.html", embedded::MISSING_LOCATION)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("weather/loading.html", embedded::LOADING)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("weather/error.html", embedded::ERROR)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("weather/unavailable.html", embedded::UNAVAILABLE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a block view to its HTML fragment
    ///
    /// # Errors
    ///
    /// Returns an error when template rendering fails.
    pub fn render_view(&self, view: &BlockView) -> Result<String, TemplateError> {
        match view {
            BlockView::MissingLocation => self.render_plain("weather/missing_location.html"),
            BlockView::Loading => self.render_plain("weather/loading.html"),
            BlockView::Unavailable => self.render_plain("weather/unavailable.html"),
            BlockView::Error { message } => {
                let mut ctx = Context::new();
                ctx.insert("message", message);
                Ok(self.tera.render("weather/error.html", &ctx)?)
            }
            BlockView::Weather(weather) => self.render_weather(weather),
        }
    }

    fn render_plain(&self, template: &str) -> Result<String, TemplateError> {
        Ok(self.tera.render(template, &Context::new())?)
    }

    fn render_weather(&self, weather: &WeatherView) -> Result<String, TemplateError> {
        let ctx = Context::from_serialize(weather)
            .map_err(|e| TemplateError::Render(e.to_string()))?;
        Ok(self.tera.render("weather/block.html", &ctx)?)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

impl BlockRendererPort for TemplateEngine {
    fn render_block(&self, view: &BlockView) -> Result<String, ApplicationError> {
        self.render_view(view)
            .map_err(|e| ApplicationError::Internal(e.to_string()))
    }
}
