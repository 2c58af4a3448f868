use crate::bridge;
use leptos::*;
use relief_registry::{CONTACT_SUBJECTS, EMERGENCY_CONTACTS, FAQ_ENTRIES};

#[component]
pub fn HelpPage() -> impl IntoView {
    view! {
      <div class="page">
        <div class="page-header">
          <h1>"Contact & Support"</h1>
          <p>
            "Get in touch with us for support, report issues, or suggest \
             improvements to help us serve the community better."
          </p>
        </div>
        <div class="grid grid-2">
          <ContactForm/>
          <div class="stack">
            <EmergencyNumbers/>
            <div class="card">
              <h2 class="card-title">"Shelter Updates"</h2>
              <p>
                "For officials or managers of shelters to add, remove, or update \
                 their location details, please contact "
                <a href="mailto:shelters@suraksha.in">"shelters@suraksha.in"</a>
                "."
              </p>
            </div>
          </div>
        </div>
        <FaqAccordion/>
      </div>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let subject = create_rw_signal(CONTACT_SUBJECTS[0].to_string());
    let message = create_rw_signal(String::new());

    let submit = move |_| {
        if name.get_untracked().trim().is_empty() || email.get_untracked().trim().is_empty() {
            bridge::alert("Please fill in your name and email");
            return;
        }
        bridge::alert("Thank you for your message! We will get back to you soon.");
        name.set(String::new());
        email.set(String::new());
        subject.set(CONTACT_SUBJECTS[0].to_string());
        message.set(String::new());
    };

    view! {
      <div class="card form-card">
        <h2 class="card-title">"Send us a Message"</h2>
        <div class="stack">
          <div>
            <label class="field-label">"Full Name *"</label>
            <input
              type="text"
              prop:value=move || name.get()
              on:input=move |ev| name.set(event_target_value(&ev))
              required
            />
          </div>
          <div>
            <label class="field-label">"Email Address *"</label>
            <input
              type="email"
              prop:value=move || email.get()
              on:input=move |ev| email.set(event_target_value(&ev))
              required
            />
          </div>
          <div>
            <label class="field-label">"Subject"</label>
            <select
              prop:value=move || subject.get()
              on:change=move |ev| subject.set(event_target_value(&ev))
            >
              {CONTACT_SUBJECTS
                  .iter()
                  .copied()
                  .map(|name| view! { <option value=name>{name}</option> })
                  .collect::<Vec<_>>()}
            </select>
          </div>
          <div>
            <label class="field-label">"Message *"</label>
            <textarea
              prop:value=move || message.get()
              on:input=move |ev| message.set(event_target_value(&ev))
              placeholder="How can we help you?"
              required
            ></textarea>
          </div>
          <button class="submit-button" on:click=submit>"Send Message"</button>
        </div>
      </div>
    }
}

#[component]
fn EmergencyNumbers() -> impl IntoView {
    view! {
      <div class="card">
        <h2 class="card-title">"Emergency Numbers"</h2>
        <ul class="contact-list">
          {EMERGENCY_CONTACTS
              .iter()
              .map(|contact| view! {
                <li class="contact-item">
                  <span>{contact.service}</span>
                  <span class="contact-number">{contact.number}</span>
                </li>
              })
              .collect::<Vec<_>>()}
        </ul>
      </div>
    }
}

#[component]
fn FaqAccordion() -> impl IntoView {
    // Mutually exclusive: at most one entry expanded at a time.
    let expanded = create_rw_signal(None::<usize>);

    let toggle = move |index: usize| {
        expanded.update(|current| {
            *current = if *current == Some(index) {
                None
            } else {
                Some(index)
            };
        });
    };

    view! {
      <div class="card">
        <h2 class="card-title">"Frequently Asked Questions"</h2>
        <div class="faq-list">
          {FAQ_ENTRIES
              .iter()
              .enumerate()
              .map(|(index, entry)| view! {
                <div class="faq-item">
                  <button class="faq-question" on:click=move |_| toggle(index)>
                    {entry.question}
                    <span class="faq-marker">
                      {move || if expanded.get() == Some(index) { "−" } else { "+" }}
                    </span>
                  </button>
                  <Show when=move || expanded.get() == Some(index) fallback=|| ()>
                    <p class="faq-answer">{entry.answer}</p>
                  </Show>
                </div>
              })
              .collect::<Vec<_>>()}
        </div>
      </div>
    }
}
