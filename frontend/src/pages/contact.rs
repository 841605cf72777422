use yew::prelude::*;

use crate::contact::form::ContactForm;
use crate::contact::submission::EndpointHandle;

#[function_component(Contact)]
pub fn contact() -> Html {
    let endpoint = use_state(EndpointHandle::for_build);

    html! {
        <div class="contact-page">
            <section class="page-hero contact-hero">
                <h1>{"تواصل معنا"}</h1>
                <p>{"لديك سؤال عن التدريب الميداني؟ أرسل لنا رسالتك وسنرد عليك في أقرب وقت"}</p>
            </section>

            <section class="contact-section">
                <div class="container contact-grid">
                    <aside class="contact-info">
                        <div class="info-card">
                            <i class="fas fa-map-marker-alt"></i>
                            <h3>{"العنوان"}</h3>
                            <p>{"وحدة التدريب الميداني، مبنى شؤون الطلاب، الدور الثاني"}</p>
                        </div>
                        <div class="info-card">
                            <i class="fas fa-envelope"></i>
                            <h3>{"البريد الإلكتروني"}</h3>
                            <p><a href="mailto:training@ku.edu.sa">{"training@ku.edu.sa"}</a></p>
                        </div>
                        <div class="info-card">
                            <i class="fas fa-clock"></i>
                            <h3>{"ساعات العمل"}</h3>
                            <p>{"الأحد - الخميس، 8 صباحاً - 3 مساءً"}</p>
                        </div>
                    </aside>
                    <ContactForm endpoint={(*endpoint).clone()} />
                </div>
            </section>

            <style>
                {r#"
                .contact-hero {
                    text-align: center;
                    padding: 6rem 2rem 4rem;
                    background: linear-gradient(135deg, var(--primary-700), var(--primary-500));
                    color: white;
                }
                .contact-section {
                    padding: 3rem 2rem;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 2rem;
                    max-width: 1100px;
                    margin: 0 auto;
                }
                .info-card {
                    background: white;
                    border-radius: var(--radius-lg);
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    box-shadow: var(--shadow-md);
                }
                .info-card i {
                    color: var(--primary-600);
                    font-size: 1.5rem;
                }
                @media (max-width: 768px) {
                    .contact-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
