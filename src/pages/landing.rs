use chrono::Datelike;
use yew::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::lead_form_modal::LeadFormModal;
use crate::components::nav::Nav;
use crate::components::reveal::Reveal;
use crate::components::warning_modal::WarningModal;
use crate::config;
use crate::modal::use_modal_controller;

const FEATURES: [(&str, &str, &str); 3] = [
    ("★", "Calidad Premium", "Solo productos seleccionados y certificados."),
    ("🚚", "Envíos a todo el país", "Llevamos tu nuevo iPhone a donde estés, seguro y rápido."),
    ("⚡", "Garantía Oficial", "Respaldo total en cada compra que realices."),
];

const TESTIMONIALS: [(&str, &str, &str); 3] = [
    ("Lucía M.", "Villaguay", "Entregué mi iPhone 11 y me llevé el 15 el mismo día. Atención de diez."),
    ("Martín G.", "Maciá", "Me asesoraron sin apuro y el equipo llegó impecable."),
    ("Carla S.", "Rosario del Tala", "La cotización del usado fue justa y transparente."),
];

const MARQUEE: [&str; 6] = ["iPhone", "iPad", "MacBook", "AirPods", "Apple Watch", "Accesorios"];

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let controller = use_modal_controller();
    let blocked_link = use_state(|| None::<AttrValue>);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_lead_form = controller.open_lead_form_callback();

    let on_popup_blocked = {
        let controller = controller.clone();
        let blocked_link = blocked_link.clone();
        Callback::from(move |link: String| {
            blocked_link.set(Some(link.into()));
            controller.open_warning();
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Nav />

            <header id="inicio" class="hero">
                <div class="hero-glow left"></div>
                <div class="hero-glow right"></div>
                <div class="hero-content">
                    <h1>
                        {"Tecnología que "}<br />
                        <span class="gradient-text">{"Inspira."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Descubre el ecosistema Apple en su máxima expresión. Calidad, garantía y la elegancia que mereces."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_lead_form.clone()}>{"Ver Catálogo →"}</button>
                        <button class="hero-cta glass" onclick={open_lead_form.clone()}>{"Cotizar Usado"}</button>
                    </div>
                </div>
            </header>

            <div class="marquee">
                <div class="marquee-track">
                    { for MARQUEE.iter().chain(MARQUEE.iter()).map(|item| html! {
                        <span class="marquee-item">{*item}</span>
                    }) }
                </div>
            </div>

            <section id="productos" class="features">
                <div class="features-grid">
                    { for FEATURES.iter().enumerate().map(|(i, (icon, title, desc))| html! {
                        <Reveal key={*title} delay_ms={i as u32 * 200}>
                            <GlassCard class="feature-card">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </GlassCard>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="canje" class="trade-in">
                <Reveal class="trade-in-image">
                    <div class="floating-badge">{"Actualizate"}<br />{"Fácil"}</div>
                </Reveal>
                <div class="trade-in-copy">
                    <Reveal>
                        <h2>{"Recibimos "}<br /><span class="gradient-text">{"tu usado."}</span></h2>
                    </Reveal>
                    <Reveal delay_ms={200}>
                        <p class="trade-in-pitch">
                            {"No lo guardes en un cajón. Úsalo como parte de pago y llévate el modelo que siempre quisiste. Cotización inmediata y transparente."}
                        </p>
                    </Reveal>
                    <Reveal delay_ms={400}>
                        <button class="link-cta" onclick={open_lead_form.clone()}>{"Cotizar mi equipo ›"}</button>
                    </Reveal>
                </div>
            </section>

            <section class="testimonials">
                <Reveal>
                    <h2>{"Lo que dicen nuestros clientes"}</h2>
                </Reveal>
                <div class="testimonials-grid">
                    { for TESTIMONIALS.iter().map(|(name, town, quote)| html! {
                        <GlassCard key={*name} class="testimonial">
                            <p class="quote">{format!("“{}”", quote)}</p>
                            <p class="author">{*name}<span>{format!(" · {}", town)}</span></p>
                        </GlassCard>
                    }) }
                </div>
            </section>

            <section id="contacto" class="location">
                <Reveal>
                    <h2>{format!("Visítanos en {}", config::STORE_TOWN)}</h2>
                </Reveal>
                <GlassCard class="location-card">
                    <div class="location-pin">{"📍"}</div>
                    <div class="location-details">
                        <h3>{"Oficina Comercial"}</h3>
                        <p>{config::STORE_ADDRESS}</p>
                        <p class="hours">{config::STORE_HOURS}</p>
                    </div>
                    <a class="map-button" href={config::MAP_URL} target="_blank" rel="noopener noreferrer">
                        {"Ver Mapa"}
                    </a>
                </GlassCard>
            </section>

            <footer class="footer">
                <span class="footer-brand">
                    {config::STORE_NAME}<span class="accent">{config::STORE_TOWN}</span>
                </span>
                <span>{format!("© {} Todos los derechos reservados.", current_year())}</span>
                <div class="footer-links">
                    <a href={config::INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    <a href={config::FACEBOOK_URL} target="_blank" rel="noopener noreferrer">{"Facebook"}</a>
                    <a href={format!("https://wa.me/{}", config::WHATSAPP_NUMBER)} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                </div>
            </footer>

            <LeadFormModal
                is_open={controller.lead_form_open()}
                on_close={controller.close_lead_form_callback()}
                {on_popup_blocked}
            />
            <WarningModal
                is_open={controller.warning_open()}
                on_close={controller.close_warning_callback()}
                link={(*blocked_link).clone()}
            />
        </div>
    }
}

const LANDING_CSS: &str = r#"
.landing-page {
    background: #000;
    color: #fff;
    overflow-x: hidden;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
}
.accent { color: #a855f7; }
.gradient-text {
    background: linear-gradient(90deg, #3b82f6, #a855f7);
    -webkit-background-clip: text;
    -webkit-text-fill-color: transparent;
}
.top-nav {
    position: fixed;
    top: 0;
    width: 100%;
    z-index: 50;
    padding: 2rem 0;
    transition: all 0.3s ease;
}
.top-nav.scrolled {
    padding: 1rem 0;
    background: rgba(0, 0, 0, 0.6);
    backdrop-filter: blur(12px);
}
.nav-content {
    max-width: 80rem;
    margin: 0 auto;
    padding: 0 1.5rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.nav-logo { display: flex; gap: 0.5rem; align-items: center; color: #fff; text-decoration: none; font-weight: 700; font-size: 1.5rem; }
.nav-logo-mark {
    width: 2rem; height: 2rem; border-radius: 0.5rem;
    display: flex; align-items: center; justify-content: center;
    background: linear-gradient(135deg, #3b82f6, #a855f7);
}
.nav-links { display: flex; gap: 2rem; }
.nav-link { color: #d1d5db; text-decoration: none; font-size: 0.875rem; }
.nav-link:hover { color: #fff; }
.nav-cta, .hero-cta, .map-button {
    background: #fff; color: #000; border: none; border-radius: 9999px;
    padding: 0.5rem 1.25rem; font-weight: 600; cursor: pointer; text-decoration: none;
    transition: transform 0.2s ease;
}
.nav-cta:hover, .hero-cta:hover { transform: scale(1.05); }
.hero {
    position: relative; min-height: 100vh; display: flex; flex-direction: column;
    align-items: center; justify-content: center; text-align: center; padding: 5rem 1rem 0;
}
.hero-glow { position: absolute; width: 24rem; height: 24rem; border-radius: 50%; filter: blur(128px); }
.hero-glow.left { top: 25%; left: 25%; background: rgba(59, 130, 246, 0.2); }
.hero-glow.right { bottom: 25%; right: 25%; background: rgba(168, 85, 247, 0.2); }
.hero-content { position: relative; z-index: 1; max-width: 64rem; }
.hero h1 { font-size: clamp(3rem, 8vw, 6rem); line-height: 1.1; margin: 0 0 2rem; }
.hero-subtitle { font-size: 1.25rem; color: #9ca3af; max-width: 42rem; margin: 0 auto 2rem; }
.hero-cta-group { display: flex; gap: 1rem; justify-content: center; }
.hero-cta { padding: 1rem 2rem; font-size: 1.125rem; }
.hero-cta.glass { background: rgba(255, 255, 255, 0.08); color: #fff; border: 1px solid rgba(255, 255, 255, 0.15); }
.marquee { overflow: hidden; border-top: 1px solid rgba(255,255,255,0.1); border-bottom: 1px solid rgba(255,255,255,0.1); }
.marquee-track { display: flex; width: max-content; animation: marquee 20s linear infinite; }
.marquee-item { padding: 1.5rem 3rem; color: #6b7280; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; }
@keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
.features, .testimonials, .location { padding: 8rem 1.5rem; }
.features-grid, .testimonials-grid {
    max-width: 80rem; margin: 0 auto; display: grid;
    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 2rem;
}
.glass-card {
    background: rgba(255, 255, 255, 0.04); border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem; padding: 2rem; backdrop-filter: blur(10px);
    transition: transform 0.3s ease, box-shadow 0.3s ease;
}
.glass-card:hover { transform: translateY(-5px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.4); }
.feature-icon { font-size: 1.5rem; margin-bottom: 1.5rem; }
.reveal { opacity: 0; transform: translateY(30px); transition: opacity 0.8s ease-out, transform 0.8s ease-out; }
.reveal.visible { opacity: 1; transform: none; }
.trade-in {
    max-width: 80rem; margin: 0 auto; padding: 6rem 1.5rem; min-height: 100vh;
    display: grid; grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr)); gap: 4rem; align-items: center;
}
.trade-in-image {
    position: relative; min-height: 20rem; border-radius: 1.5rem; border: 1px solid rgba(255,255,255,0.1);
    background: linear-gradient(135deg, rgba(59, 130, 246, 0.3), rgba(168, 85, 247, 0.3));
}
.floating-badge {
    position: absolute; top: -2.5rem; right: -2.5rem; width: 10rem; height: 10rem; border-radius: 50%;
    display: flex; align-items: center; justify-content: center; text-align: center; font-weight: 700;
    background: rgba(0,0,0,0.5); border: 1px solid rgba(168, 85, 247, 0.3); backdrop-filter: blur(24px);
    animation: float 4s ease-in-out infinite;
}
@keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-20px); } }
.trade-in h2 { font-size: clamp(3rem, 6vw, 4.5rem); line-height: 1.1; }
.trade-in-pitch { font-size: 1.25rem; color: #9ca3af; border-left: 4px solid #3b82f6; padding-left: 1.5rem; }
.link-cta { background: none; border: none; color: #3b82f6; font-weight: 700; font-size: 1.125rem; cursor: pointer; }
.testimonials h2, .location h2 { text-align: center; font-size: 2.5rem; margin-bottom: 3rem; }
.testimonial .quote { font-size: 1.125rem; color: #e5e7eb; }
.testimonial .author { color: #fff; font-weight: 700; }
.testimonial .author span { color: #6b7280; font-weight: 400; }
.location-card { max-width: 48rem; margin: 0 auto; display: flex; gap: 2rem; align-items: center; flex-wrap: wrap; }
.location-pin { font-size: 2rem; }
.location-details { flex: 1; }
.location-details .hours { color: #3b82f6; font-size: 0.875rem; }
.footer {
    border-top: 1px solid rgba(255,255,255,0.1); padding: 3rem 1.5rem; color: #6b7280; font-size: 0.875rem;
    display: flex; justify-content: space-between; align-items: center; flex-wrap: wrap; gap: 1.5rem;
}
.footer-brand { color: #fff; font-weight: 700; font-size: 1.125rem; }
.footer-links { display: flex; gap: 1.5rem; }
.footer-links a { color: inherit; text-decoration: none; }
.footer-links a:hover { color: #fff; }
.modal-overlay {
    position: fixed; inset: 0; z-index: 100; background: rgba(0, 0, 0, 0.7);
    display: flex; align-items: center; justify-content: center; padding: 1rem;
}
.modal-content {
    position: relative; width: 100%; max-width: 28rem; background: #111; color: #fff;
    border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 1.5rem; padding: 2rem;
}
.modal-content form { display: flex; flex-direction: column; gap: 0.5rem; }
.modal-content input, .modal-content select {
    background: #000; color: #fff; border: 1px solid rgba(255,255,255,0.2); border-radius: 0.75rem; padding: 0.75rem;
}
.modal-close { position: absolute; top: 1rem; right: 1rem; background: none; border: none; color: #9ca3af; cursor: pointer; }
.modal-button { margin-top: 1rem; border-radius: 9999px; padding: 0.75rem 1.5rem; font-weight: 700; cursor: pointer; border: none; display: inline-block; text-decoration: none; }
.modal-button.primary { background: linear-gradient(90deg, #3b82f6, #a855f7); color: #fff; }
.modal-button.cancel { background: rgba(255,255,255,0.1); color: #fff; margin-left: 0.5rem; }
.form-error { color: #f87171; font-size: 0.875rem; }
@media (max-width: 768px) {
    .nav-links { display: none; }
    .hero-cta-group { flex-direction: column; }
    .floating-badge { right: 0; }
}
"#;
