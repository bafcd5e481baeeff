use yew::prelude::*;

use crate::components::contact::ContactSection;
use crate::LOGO_FULL;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    /// Smooth-scrolls to the named section and closes the mobile menu.
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Scroll to top only on initial mount
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

    let navigate = {
        let on_navigate = props.on_navigate.clone();
        move |key: &'static str| {
            let on_navigate = on_navigate.clone();
            Callback::from(move |_: MouseEvent| on_navigate.emit(key))
        }
    };

    html! {
        <div class="home-page">

        <section id="hero" class="hero">
            <div class="hero-content">
                <div class="hero-copy fade-up">
                    <h1>
                        {"Secure, Scalable, Cost-Efficient "}
                        <span class="hero-accent">{"Multi-Cloud"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We empower startups and mid-sized businesses to achieve their goals through optimized costs, seamless migrations, and tailored cloud & IT solutions—backed by 24/7 support."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta dark" onclick={navigate("services")}>
                            {"Explore Services"}
                        </button>
                        <button class="hero-cta outline" onclick={navigate("contact")}>
                            {"Talk to an Expert"}
                        </button>
                    </div>
                    <div class="hero-badges">
                        <span>{"✅ Proven cost savings up to 30%"}</span>
                        <span>{"🛡️ Security & compliance first"}</span>
                        <span>{"🌐 AWS • Azure • GCP"}</span>
                    </div>
                </div>

                <div class="hero-panel fade-up delayed">
                    <div class="preview-grid">
                        <div class="preview-card">
                            <span class="card-icon">{"💰"}</span>
                            <p class="preview-title">{"Cost Optimization & FinOps"}</p>
                            <p class="preview-desc">{"Streamline multi-cloud spend without sacrificing performance."}</p>
                        </div>
                        <div class="preview-card">
                            <span class="card-icon">{"🌐"}</span>
                            <p class="preview-title">{"Cloud Migration & Network"}</p>
                            <p class="preview-desc">{"Smooth, secure migrations with low-latency architectures."}</p>
                        </div>
                        <div class="preview-card">
                            <span class="card-icon">{"🖥️"}</span>
                            <p class="preview-title">{"Infra & DevOps Mgmt"}</p>
                            <p class="preview-desc">{"24/7 monitoring, backup, DR, and DevOps support."}</p>
                        </div>
                        <div class="preview-card">
                            <span class="card-icon">{"🛡️"}</span>
                            <p class="preview-title">{"Security & Compliance"}</p>
                            <p class="preview-desc">{"IAM, threat protection, governance & audits."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>

        <section id="services" class="services-section">
            <div class="section-inner">
                <h2>{"Services"}</h2>
                <p class="section-lead">{"End-to-end capabilities across strategy, build, and run."}</p>

                <div class="card-grid">
                    <div class="service-card">
                        <span class="card-icon">{"💰"}</span>
                        <h3>{"Cost Optimization & FinOps"}</h3>
                        <ul>
                            <li>{"Identify & eliminate unnecessary spend"}</li>
                            <li>{"Analytics-driven savings (up to 30%)"}</li>
                            <li>{"Budgets, forecasting & reporting"}</li>
                        </ul>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🌐"}</span>
                        <h3>{"Cloud Migration & Network Optimization"}</h3>
                        <ul>
                            <li>{"Phased assessments & execution"}</li>
                            <li>{"Secure, scalable, low-latency architectures"}</li>
                            <li>{"Minimal disruption to business"}</li>
                        </ul>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🖥️"}</span>
                        <h3>{"Infrastructure & DevOps Management"}</h3>
                        <ul>
                            <li>{"24/7 monitoring, backup & DR"}</li>
                            <li>{"CI/CD pipelines & automation"}</li>
                            <li>{"SRE best practices for reliability"}</li>
                        </ul>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🛡️"}</span>
                        <h3>{"Security & Compliance"}</h3>
                        <ul>
                            <li>{"IAM hardening & threat protection"}</li>
                            <li>{"Governance, audits & policy as code"}</li>
                            <li>{"Regulatory alignment & posture mgmt"}</li>
                        </ul>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"✅"}</span>
                        <h3>{"Audit & Governance"}</h3>
                        <ul>
                            <li>{"Cost, performance & security reviews"}</li>
                            <li>{"Architecture health checks"}</li>
                            <li>{"Actionable remediation plans"}</li>
                        </ul>
                    </div>
                    <div class="service-card">
                        <span class="card-icon">{"🎧"}</span>
                        <h3>{"Billing & Multi-Cloud Support"}</h3>
                        <ul>
                            <li>{"Unified visibility across AWS, Azure, GCP"}</li>
                            <li>{"Centralized billing, budgeting & alerts"}</li>
                            <li>{"Ongoing improvements & dedicated support"}</li>
                        </ul>
                    </div>
                </div>
            </div>
        </section>

        <section id="why" class="why-section">
            <div class="section-inner">
                <h2>{"Why Partner With Us"}</h2>
                <p class="section-lead">{"Experience, partnerships, and a results-first mindset."}</p>

                <div class="card-grid">
                    <div class="why-card">
                        <span class="card-icon">{"✅"}</span>
                        <h3>{"Experienced Team"}</h3>
                        <p>{"Cross-industry expertise with certified professionals."}</p>
                    </div>
                    <div class="why-card">
                        <span class="card-icon">{"☁️"}</span>
                        <h3>{"Multi-Cloud Native"}</h3>
                        <p>{"Deep experience across AWS, Azure, and GCP."}</p>
                    </div>
                    <div class="why-card">
                        <span class="card-icon">{"🛡️"}</span>
                        <h3>{"Security-First"}</h3>
                        <p>{"Compliance, governance, and robust protection by design."}</p>
                    </div>
                    <div class="why-card">
                        <span class="card-icon">{"💰"}</span>
                        <h3>{"Proven Savings"}</h3>
                        <p>{"Documented cost reductions up to 30%."}</p>
                    </div>
                    <div class="why-card">
                        <span class="card-icon">{"🖥️"}</span>
                        <h3>{"End-to-End Delivery"}</h3>
                        <p>{"From strategy to operations, including DevOps & DR."}</p>
                    </div>
                    <div class="why-card">
                        <span class="card-icon">{"🎧"}</span>
                        <h3>{"Vendor & Licensing"}</h3>
                        <p>{"Authorized Microsoft reseller, OEM partnerships, best-price coordination."}</p>
                    </div>
                </div>
            </div>
        </section>

        <section id="about" class="about-section">
            <div class="section-inner narrow">
                <h2>{"Our Vision"}</h2>
                <p>
                    {"We empower startups and mid-sized businesses to achieve their goals by leveraging the right technology in a secure, scalable, and cost-efficient way. As your partner in cost optimization, cloud migration, and pinpoint services, we combine expertise, innovation, and a personalized approach to drive sustainable growth and long-term value."}
                </p>
            </div>
        </section>

        <ContactSection />

        <footer class="site-footer">
            <div class="footer-content">
                <button class="footer-brand" onclick={navigate("hero")} aria-label="Go to top">
                    <img src={LOGO_FULL} alt="Hemz InfoTech" />
                </button>
                <div class="footer-clouds">
                    <span>{"Multi-cloud:"}</span>
                    <span class="cloud-badge">{"AWS"}</span>
                    <span class="cloud-badge">{"Azure"}</span>
                    <span class="cloud-badge">{"GCP"}</span>
                </div>
            </div>
        </footer>

        <style>
            {r#"
                .home-page section {
                    scroll-margin-top: 80px;
                }
                .section-inner {
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }
                .section-inner.narrow {
                    max-width: 820px;
                }
                .section-inner h2 {
                    font-size: 2rem;
                    letter-spacing: -0.02em;
                }
                .section-lead {
                    margin-top: 0.5rem;
                    color: #475569;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(20px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }
                .fade-up {
                    animation: fadeUp 0.6s ease-out both;
                }
                .fade-up.delayed {
                    animation-duration: 0.8s;
                    animation-delay: 0.1s;
                }

                .hero {
                    background:
                        radial-gradient(circle at 20% 20%, rgba(99, 102, 241, 0.18), transparent 40%),
                        radial-gradient(circle at 80% 0%, rgba(56, 189, 248, 0.18), transparent 35%);
                }
                .hero-content {
                    max-width: 1120px;
                    margin: 0 auto;
                    padding: 5rem 1.5rem;
                    display: grid;
                    grid-template-columns: 7fr 5fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .hero-copy h1 {
                    font-size: 3rem;
                    font-weight: 800;
                    letter-spacing: -0.03em;
                    line-height: 1.1;
                }
                .hero-accent {
                    background: linear-gradient(90deg, #4f46e5, #0ea5e9);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .hero-subtitle {
                    margin-top: 1rem;
                    font-size: 1.125rem;
                    color: #475569;
                    max-width: 42rem;
                }
                .hero-cta-group {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.75rem;
                }
                .hero-cta {
                    border-radius: 12px;
                    padding: 0.75rem 1.25rem;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                .hero-cta.dark {
                    background: #0f172a;
                    color: #fff;
                    border: none;
                    box-shadow: 0 4px 12px rgba(15, 23, 42, 0.2);
                }
                .hero-cta.dark:hover {
                    background: #1e293b;
                }
                .hero-cta.outline {
                    background: transparent;
                    border: 1px solid #cbd5e1;
                }
                .hero-cta.outline:hover {
                    border-color: #94a3b8;
                }
                .hero-badges {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .hero-panel {
                    background: #fff;
                    border-radius: 24px;
                    padding: 1.5rem;
                    box-shadow: 0 20px 40px rgba(15, 23, 42, 0.08);
                    border: 1px solid #e2e8f0;
                }
                .preview-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .preview-card {
                    border: 1px solid #e2e8f0;
                    border-radius: 16px;
                    padding: 1rem;
                    transition: box-shadow 0.2s ease;
                }
                .preview-card:hover {
                    box-shadow: 0 8px 16px rgba(15, 23, 42, 0.08);
                }
                .preview-title {
                    margin-top: 0.5rem;
                    font-weight: 600;
                    font-size: 0.875rem;
                }
                .preview-desc {
                    font-size: 0.75rem;
                    color: #475569;
                }
                .card-icon {
                    font-size: 1.25rem;
                }

                .services-section,
                .why-section,
                .about-section {
                    padding: 5rem 0;
                }
                .why-section {
                    background: linear-gradient(135deg, #fff, #f1f5f9);
                    border-top: 1px solid #e2e8f0;
                    border-bottom: 1px solid #e2e8f0;
                }
                .card-grid {
                    margin-top: 2.5rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .service-card,
                .why-card {
                    background: #fff;
                    border: 1px solid #e2e8f0;
                    border-radius: 24px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(15, 23, 42, 0.05);
                    transition: box-shadow 0.2s ease;
                }
                .service-card:hover,
                .why-card:hover {
                    box-shadow: 0 8px 16px rgba(15, 23, 42, 0.08);
                }
                .service-card h3,
                .why-card h3 {
                    margin-top: 0.75rem;
                    font-size: 1rem;
                }
                .service-card ul {
                    margin-top: 0.75rem;
                    padding-left: 1.25rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .why-card p {
                    margin-top: 0.25rem;
                    font-size: 0.875rem;
                    color: #475569;
                }
                .about-section p {
                    margin-top: 1rem;
                    color: #334155;
                    line-height: 1.7;
                }

                .site-footer {
                    padding: 2.5rem 1.5rem;
                    font-size: 0.875rem;
                }
                .footer-content {
                    max-width: 1120px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    flex-wrap: wrap;
                }
                .footer-brand {
                    border: none;
                    background: none;
                    cursor: pointer;
                }
                .footer-brand img {
                    height: 32px;
                    width: auto;
                }
                .footer-clouds {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #64748b;
                }
                .cloud-badge {
                    border: 1px solid #cbd5e1;
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                }

                @media (max-width: 900px) {
                    .hero-content {
                        grid-template-columns: 1fr;
                        padding: 4rem 1.5rem;
                    }
                    .hero-copy h1 {
                        font-size: 2.25rem;
                    }
                    .card-grid {
                        grid-template-columns: 1fr 1fr;
                    }
                }
                @media (max-width: 640px) {
                    .card-grid {
                        grid-template-columns: 1fr;
                    }
                }
            "#}
        </style>
        </div>
    }
}
