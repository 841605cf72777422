use web_sys::{window, MouseEvent};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::reveal::Reveal;
use crate::scroll::scroll_to_anchor;
use crate::Route;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const FEATURES: [Card; 4] = [
    Card {
        icon: "fas fa-building",
        title: "جهات تدريب معتمدة",
        body: "أكثر من مئة جهة حكومية وخاصة تستقبل طلاب الجامعة في جميع مناطق المملكة.",
    },
    Card {
        icon: "fas fa-chalkboard-teacher",
        title: "إشراف مزدوج",
        body: "مشرف أكاديمي من القسم ومشرف ميداني من جهة التدريب يتابعان تقدمك أسبوعياً.",
    },
    Card {
        icon: "fas fa-certificate",
        title: "شهادة معتمدة",
        body: "شهادة إتمام إلكترونية تضاف إلى سجلك الأكاديمي وتدعم سيرتك الذاتية.",
    },
    Card {
        icon: "fas fa-handshake",
        title: "فرص توظيف",
        body: "كثير من المتدربين يحصلون على عروض عمل من جهات تدريبهم بعد التخرج.",
    },
];

const STEPS: [Card; 4] = [
    Card {
        icon: "fas fa-clipboard-check",
        title: "تحقق من الأهلية",
        body: "أنهِ ثمانين بالمئة من ساعات خطتك الدراسية على الأقل.",
    },
    Card {
        icon: "fas fa-search-location",
        title: "اختر جهة التدريب",
        body: "اختر من قائمة الجهات المعتمدة أو رشّح جهة جديدة للاعتماد.",
    },
    Card {
        icon: "fas fa-file-signature",
        title: "سجّل في البرنامج",
        body: "قدّم طلبك عبر بوابة الطالب خلال فترة التسجيل المعلنة.",
    },
    Card {
        icon: "fas fa-user-graduate",
        title: "ابدأ التدريب",
        body: "عشرة أسابيع من الخبرة العملية تنتهي بتقرير وعرض أمام لجنة القسم.",
    },
];

const STATS: [(&str, &str); 3] = [
    ("+100", "جهة تدريب"),
    ("+2500", "متدرب سنوياً"),
    ("92%", "نسبة رضا الجهات"),
];

#[function_component(Home)]
pub fn home() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let to_program = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_anchor("program");
    });

    html! {
        <div class="landing-page">
            <section class="hero">
                <h1>{"برنامج التدريب الميداني"}</h1>
                <p class="hero-subtitle">
                    {"جسرك من قاعة الدراسة إلى سوق العمل: تدريب عملي منظم في جهات معتمدة بإشراف أكاديمي وميداني."}
                </p>
                <div class="hero-actions">
                    <a href="#program" class="btn btn-primary" onclick={to_program}>
                        {"تعرّف على البرنامج"}
                    </a>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">
                        {"تواصل معنا"}
                    </Link<Route>>
                </div>
            </section>

            <section id="program" class="features">
                <h2>{"لماذا التدريب الميداني؟"}</h2>
                <div class="features-grid">
                    { for FEATURES.iter().map(|card| html! {
                        <Reveal class="feature-card">
                            <i class={card.icon}></i>
                            <h3>{card.title}</h3>
                            <p>{card.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"خطوات الالتحاق"}</h2>
                <div class="steps-grid">
                    { for STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal class="step">
                            <span class="step-number">{(i + 1).to_string()}</span>
                            <i class={step.icon}></i>
                            <h3>{step.title}</h3>
                            <p>{step.body}</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="stats">
                { for STATS.iter().map(|(value, label)| html! {
                    <Reveal class="stat-card">
                        <span class="stat-value">{*value}</span>
                        <span class="stat-label">{*label}</span>
                    </Reveal>
                }) }
            </section>

            <section class="footer-cta">
                <h2>{"لديك سؤال؟"}</h2>
                <p>{"اطلع على الأسئلة الشائعة أو راسل وحدة التدريب الميداني مباشرة."}</p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Faq} classes="btn btn-primary">
                        {"الأسئلة الشائعة"}
                    </Link<Route>>
                    <Link<Route> to={Route::Contact} classes="btn btn-outline">
                        {"تواصل معنا"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .hero {
                    text-align: center;
                    padding: 8rem 2rem 6rem;
                    background: linear-gradient(135deg, var(--primary-700), var(--primary-500));
                    color: white;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1.5rem;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 700px;
                    margin: 0 auto 2rem;
                    opacity: 0.9;
                }
                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .features, .how-it-works, .stats, .footer-cta {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }
                .features-grid, .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                    margin-top: 2rem;
                }
                .stats {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .feature-card, .step, .stat-card {
                    background: white;
                    border-radius: var(--radius-lg);
                    padding: 2rem 1.5rem;
                    box-shadow: var(--shadow-md);
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                }
                .animate-in {
                    opacity: 1;
                    transform: translateY(0);
                }
                .feature-card i, .step i {
                    font-size: 2rem;
                    color: var(--primary-600);
                    margin-bottom: 1rem;
                }
                .step-number {
                    display: inline-block;
                    width: 2rem;
                    height: 2rem;
                    line-height: 2rem;
                    border-radius: 50%;
                    background: var(--primary-100);
                    color: var(--primary-700);
                    font-weight: bold;
                    margin-bottom: 0.75rem;
                }
                .stat-value {
                    display: block;
                    font-size: 2.5rem;
                    font-weight: bold;
                    color: var(--primary-600);
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.25rem;
                    }
                    .stats {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
