#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqCategory {
    /// Value of `data-category`; the panel id is `<id>-faq`.
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub entries: &'static [FaqEntry],
}

pub static CATEGORIES: &[FaqCategory] = &[
    FaqCategory {
        id: "general",
        label: "أسئلة عامة",
        icon: "fas fa-info-circle",
        entries: &[
            FaqEntry {
                question: "ما هو برنامج التدريب الميداني؟",
                answer: "برنامج التدريب الميداني مقرر إلزامي يقضي فيه الطالب فصلاً تدريبياً في إحدى الجهات المعتمدة لتطبيق ما تعلمه في بيئة عمل حقيقية تحت إشراف أكاديمي وميداني.",
            },
            FaqEntry {
                question: "هل التدريب الميداني شرط للتخرج؟",
                answer: "نعم، لا يمكن إصدار وثيقة التخرج قبل اجتياز التدريب الميداني بنجاح واعتماد تقرير جهة التدريب.",
            },
            FaqEntry {
                question: "كم مدة التدريب الميداني؟",
                answer: "تبلغ مدة التدريب عشرة أسابيع متصلة بواقع خمسة أيام عمل في الأسبوع، ما لم تحدد الكلية مدة مختلفة لبعض التخصصات.",
            },
            FaqEntry {
                question: "هل يحصل المتدرب على مكافأة؟",
                answer: "تصرف بعض جهات التدريب مكافأة شهرية للمتدربين وفق أنظمتها الداخلية، ولا تلتزم الجامعة بصرف مكافأة خاصة بالتدريب.",
            },
        ],
    },
    FaqCategory {
        id: "admission",
        label: "القبول والتسجيل",
        icon: "fas fa-user-plus",
        entries: &[
            FaqEntry {
                question: "متى يمكنني التسجيل في التدريب الميداني؟",
                answer: "يفتح التسجيل في الأسبوع الثامن من الفصل الذي يسبق فصل التدريب، ويعلن عن المواعيد عبر البريد الجامعي وبوابة الطالب.",
            },
            FaqEntry {
                question: "ما شروط الالتحاق بالبرنامج؟",
                answer: "أن يكون الطالب قد أنهى ما لا يقل عن ثمانين بالمئة من الساعات المعتمدة لخطته الدراسية، وألا يقل معدله التراكمي عن الحد الذي تحدده الكلية.",
            },
            FaqEntry {
                question: "هل يمكنني اختيار جهة التدريب بنفسي؟",
                answer: "نعم، يمكنك ترشيح جهة تدريب بشرط حصولها على موافقة وحدة التدريب الميداني قبل بدء الفصل، أو الاختيار من قائمة الجهات المعتمدة.",
            },
        ],
    },
    FaqCategory {
        id: "training",
        label: "أثناء التدريب",
        icon: "fas fa-briefcase",
        entries: &[
            FaqEntry {
                question: "من يشرف على المتدرب أثناء التدريب؟",
                answer: "يشرف على كل متدرب مشرف أكاديمي من القسم ومشرف ميداني من جهة التدريب، ويتواصلان بشكل دوري لمتابعة تقدمه.",
            },
            FaqEntry {
                question: "ماذا أفعل إذا واجهت مشكلة في جهة التدريب؟",
                answer: "تواصل مع مشرفك الأكاديمي فوراً، وإن تعذر حل المشكلة يمكن رفع طلب إلى وحدة التدريب الميداني عبر صفحة التواصل.",
            },
            FaqEntry {
                question: "هل يسمح بالغياب أثناء فترة التدريب؟",
                answer: "يسمح بالغياب بعذر مقبول بما لا يتجاوز عشرة بالمئة من أيام التدريب، ويجب إبلاغ المشرف الميداني والأكاديمي مسبقاً.",
            },
        ],
    },
    FaqCategory {
        id: "evaluation",
        label: "التقييم والشهادات",
        icon: "fas fa-award",
        entries: &[
            FaqEntry {
                question: "كيف يتم تقييم المتدرب؟",
                answer: "يتوزع التقييم بين تقرير المشرف الميداني وتقرير المشرف الأكاديمي والتقرير النهائي الذي يعده الطالب ويعرضه أمام لجنة القسم.",
            },
            FaqEntry {
                question: "متى أحصل على شهادة إتمام التدريب؟",
                answer: "تصدر شهادة الإتمام إلكترونياً خلال أسبوعين من اعتماد الدرجة النهائية، ويمكن تحميلها من بوابة الطالب.",
            },
            FaqEntry {
                question: "ماذا يحدث إذا لم أجتز التدريب؟",
                answer: "يعيد الطالب التدريب في فصل لاحق، ويمكنه طلب تغيير جهة التدريب بعد مراجعة وحدة التدريب الميداني.",
            },
        ],
    },
];
