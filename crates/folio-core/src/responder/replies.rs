//! Canned assistant replies, one English and one Bengali text per topic.

use crate::locale::Localized;

pub const CREATOR: Localized<&str> = Localized::new(
    "I was created by Md Ridoan Mahmud Zisan, a Self-Driven Web Developer & IT Specialist from Bogura, Bangladesh.

Here's some info about him:
- 📫 Email: ridoan.zisan@gmail.com
- 📞 Phone: +8801712525910
- 📍 Location: Bogura, Bangladesh
- 🔗 LinkedIn: https://linkedin.com/in/ridoan-zisan
- 🩸 Blood Group: B+
- 🎂 Date of Birth: December 31, 2007
- 🌐 Religion: Humanity",
    "আমাকে তৈরি করেছেন মো. রিদওয়ান মাহমুদ জিসান, বগুড়া, বাংলাদেশের একজন স্ব-প্রণোদিত ওয়েব ডেভেলপার ও আইটি বিশেষজ্ঞ।

তাঁর সম্পর্কে কিছু তথ্য:
- 📫 ইমেইল: ridoan.zisan@gmail.com
- 📞 ফোন: +৮৮০১৭১২৫২৫৯১০
- 📍 অবস্থান: বগুড়া, বাংলাদেশ
- 🔗 লিংকডইন: https://linkedin.com/in/ridoan-zisan
- 🩸 রক্তের গ্রুপ: বি+
- 🎂 জন্ম তারিখ: ৩১ ডিসেম্বর, ২০০৭
- 🌐 ধর্ম: মানবতা",
);

pub const EDUCATION: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Education:

🎓 Higher Secondary Certificate (HSC)
- Institution: KARATOA MULTIMEDIA SCHOOL AND COLLEGE
- Year: 2023-2024
- GPA: 4.25/5.00
- Group: Science
- Major: Higher Math

🎓 Secondary School Certificate (SSC)
- Institution: DHUNAT GOVT N.U. PILOT MODEL HIGH SCHOOL
- Year: 2021-2022
- GPA: 5.00/5.00
- Group: Science
- Major: Higher Math",
    "মো. রিদওয়ান মাহমুদ জিসানের শিক্ষা:

🎓 উচ্চ মাধ্যমিক সার্টিফিকেট (এইচএসসি)
- প্রতিষ্ঠান: করতোয়া মাল্টিমিডিয়া স্কুল অ্যান্ড কলেজ
- বছর: ২০২৩-২০২৪
- জিপিএ: ৪.২৫/৫.০০
- বিভাগ: বিজ্ঞান
- প্রধান বিষয়: উচ্চতর গণিত

🎓 মাধ্যমিক স্কুল সার্টিফিকেট (এসএসসি)
- প্রতিষ্ঠান: ধুনট সরকারি এন.ইউ. পাইলট মডেল উচ্চ বিদ্যালয়
- বছর: ২০২১-২০২২
- জিপিএ: ৫.০০/৫.০০
- বিভাগ: বিজ্ঞান
- প্রধান বিষয়: উচ্চতর গণিত",
);

pub const SKILLS: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Skills:

💻 Additional Skills:
- Canva/Photoshop
- Social Media
- Web and App Development
- The concept of AI

🗣️ Language Skills:
- Bengali (Fluent)
- English (Professional)

🏆 Core Professional Skills:
- MS Office Suite
- Email Communication
- Team Collaboration
- Time Management
- Problem Solving
- Professional Ethics

💬 Communication Skills:
- Report Writing
- Active Listening
- Presentation
- Professional Email",
    "মো. রিদওয়ান মাহমুদ জিসানের দক্ষতা:

💻 অতিরিক্ত দক্ষতা:
- ক্যানভা/ফটোশপ
- সোশ্যাল মিডিয়া
- ওয়েব ও অ্যাপ ডেভেলপমেন্ট
- কৃত্রিম বুদ্ধিমত্তার ধারণা

🗣️ ভাষাগত দক্ষতা:
- বাংলা (সাবলীল)
- ইংরেজি (পেশাদার)

🏆 মূল পেশাগত দক্ষতা:
- এমএস অফিস স্যুট
- ইমেইল যোগাযোগ
- দলগত কাজ
- সময় ব্যবস্থাপনা
- সমস্যা সমাধান
- পেশাগত নৈতিকতা

💬 যোগাযোগ দক্ষতা:
- প্রতিবেদন লেখা
- মনোযোগ দিয়ে শোনা
- উপস্থাপনা
- পেশাদার ইমেইল",
);

pub const PROJECTS: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Notable Projects:

🩸 BOBDO
- Online blood donation website and web app
- Built blood donor platform serving 68k+ community members
- Implemented digital system reducing response time by 40%
- Link: https://bobdo.vercel.app

🌐 YouthHopeBD
- Platform for youth development and social services
- Link: https://youth-hope.netlify.app

🛒 ZupraMart
- All in one shopping platform
- All daily necessities available including website source code
- Link: https://zupramart.netlify.app

📐 UniConverter
- Unit converter supporting 50+ measurement categories
- Link: https://uniconverter.netlify.app

💻 DevHub
- My all projects showcase
- Link: https://devhub-i.netlify.app",
    "মো. রিদওয়ান মাহমুদ জিসানের উল্লেখযোগ্য প্রজেক্ট:

🩸 BOBDO
- অনলাইন রক্তদান ওয়েবসাইট ও ওয়েব অ্যাপ
- ৬৮ হাজারেরও বেশি সদস্যের জন্য রক্তদাতা প্ল্যাটফর্ম তৈরি
- ডিজিটাল ব্যবস্থায় সাড়া দেওয়ার সময় ৪০% কমানো
- লিংক: https://bobdo.vercel.app

🌐 YouthHopeBD
- তরুণদের উন্নয়ন ও সামাজিক সেবার প্ল্যাটফর্ম
- লিংক: https://youth-hope.netlify.app

🛒 ZupraMart
- সব-এক-জায়গায় কেনাকাটার প্ল্যাটফর্ম
- ওয়েবসাইটের সোর্স কোডসহ দৈনন্দিন সব প্রয়োজনীয় পণ্য
- লিংক: https://zupramart.netlify.app

📐 UniConverter
- ৫০টিরও বেশি পরিমাপ বিভাগের একক রূপান্তরকারী
- লিংক: https://uniconverter.netlify.app

💻 DevHub
- আমার সব প্রজেক্টের প্রদর্শনী
- লিংক: https://devhub-i.netlify.app",
);

pub const CERTIFICATES: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Certifications & Achievements:

🏅 Academic Olympiads:
- Bangladesh Mathematical Olympiad
- ICT Olympiad - Quarter Final
- National GK Olympiad

📜 Professional Certifications:
- Google IT Support
- Foundations of Cybersecurity
- Digital Marketing
- Python for Data Science and AI
- Introduction to Artificial Intelligence
- Machine Learning
- Complete Web Development
- Introduction to Python

🌍 Climate & Sustainability:
- Gender equality and human rights in climate action and renewable energy
- Net Zero 101: What, Why and How
- Introduction to Sustainable Development in Practice
- The UN Climate Change process",
    "মো. রিদওয়ান মাহমুদ জিসানের সার্টিফিকেট ও অর্জন:

🏅 একাডেমিক অলিম্পিয়াড:
- বাংলাদেশ গণিত অলিম্পিয়াড
- আইসিটি অলিম্পিয়াড - কোয়ার্টার ফাইনাল
- জাতীয় সাধারণ জ্ঞান অলিম্পিয়াড

📜 পেশাগত সার্টিফিকেট:
- গুগল আইটি সাপোর্ট
- সাইবার নিরাপত্তার ভিত্তি
- ডিজিটাল মার্কেটিং
- ডেটা সায়েন্স ও এআই-এর জন্য পাইথন
- কৃত্রিম বুদ্ধিমত্তার পরিচিতি
- মেশিন লার্নিং
- সম্পূর্ণ ওয়েব ডেভেলপমেন্ট
- পাইথনের পরিচিতি

🌍 জলবায়ু ও টেকসই উন্নয়ন:
- জলবায়ু কার্যক্রম ও নবায়নযোগ্য জ্বালানিতে লিঙ্গ সমতা ও মানবাধিকার
- নেট জিরো ১০১: কী, কেন এবং কীভাবে
- টেকসই উন্নয়নের ব্যবহারিক পরিচিতি
- জাতিসংঘের জলবায়ু পরিবর্তন প্রক্রিয়া",
);

pub const CONTACT: Localized<&str> = Localized::new(
    "You can contact Md Ridoan Mahmud Zisan through:

📧 Email: ridoan.zisan@gmail.com
📞 Phone: +8801712525910
📍 Location: Bogura, Bangladesh
🔗 LinkedIn: https://linkedin.com/in/ridoan-zisan

You can also open the Contact section to send him a message directly.",
    "মো. রিদওয়ান মাহমুদ জিসানের সাথে যোগাযোগ করতে পারেন:

📧 ইমেইল: ridoan.zisan@gmail.com
📞 ফোন: +৮৮০১৭১২৫২৫৯১০
📍 অবস্থান: বগুড়া, বাংলাদেশ
🔗 লিংকডইন: https://linkedin.com/in/ridoan-zisan

সরাসরি বার্তা পাঠাতে যোগাযোগ অংশটিও খুলতে পারেন।",
);

pub const VOLUNTEER: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Volunteer Work:

🩸 Bogura Online Blood Donation Organisation
- Role: Volunteer & Developer (2023-Present)
- Built blood donor platform serving 68k+ community members
- Implemented digital system reducing response time by 40%
- Link: https://bobdo.vercel.app

💙 Youth Hope BD
- Role: Volunteer & Developer (2025-Present)
- Developed platform for youth development and social services
- Created tools for volunteer management and event organization
- Link: https://youthhope-bd.netlify.app",
    "মো. রিদওয়ান মাহমুদ জিসানের স্বেচ্ছাসেবী কাজ:

🩸 বগুড়া অনলাইন ব্লাড ডোনেশন অর্গানাইজেশন
- ভূমিকা: স্বেচ্ছাসেবী ও ডেভেলপার (২০২৩-বর্তমান)
- ৬৮ হাজারেরও বেশি সদস্যের জন্য রক্তদাতা প্ল্যাটফর্ম তৈরি
- ডিজিটাল ব্যবস্থায় সাড়া দেওয়ার সময় ৪০% কমানো
- লিংক: https://bobdo.vercel.app

💙 ইয়ুথ হোপ বিডি
- ভূমিকা: স্বেচ্ছাসেবী ও ডেভেলপার (২০২৫-বর্তমান)
- তরুণদের উন্নয়ন ও সামাজিক সেবার প্ল্যাটফর্ম তৈরি
- স্বেচ্ছাসেবী ব্যবস্থাপনা ও ইভেন্ট আয়োজনের টুল তৈরি
- লিংক: https://youthhope-bd.netlify.app",
);

pub const FAMILY: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's Family:

👨‍👩‍👧‍👦 Family Members:
- Father: Md Rokibul Hasan Shekh
- Mother: Mst. Zosna Khatun
- Siblings: Raisa Jannat (Younger)",
    "মো. রিদওয়ান মাহমুদ জিসানের পরিবার:

👨‍👩‍👧‍👦 পরিবারের সদস্য:
- পিতা: মো. রকিবুল হাসান শেখ
- মাতা: মোছা. জোসনা খাতুন
- ভাইবোন: রাইসা জান্নাত (ছোট)",
);

pub const GREETING: Localized<&str> = Localized::new(
    "Hello there! I'm Ghost AI, here to tell you about Md Ridoan Mahmud Zisan. How can I help you today?

You can ask about:
- His education
- Skills
- Projects
- Certifications
- Volunteer work
- Contact information
- Or anything else!",
    "হ্যালো! আমি ঘোস্ট এআই, মো. রিদওয়ান মাহমুদ জিসান সম্পর্কে জানাতে এসেছি। আজ কীভাবে সাহায্য করতে পারি?

আপনি জানতে চাইতে পারেন:
- তাঁর শিক্ষা
- দক্ষতা
- প্রজেক্ট
- সার্টিফিকেট
- স্বেচ্ছাসেবী কাজ
- যোগাযোগের তথ্য
- অথবা অন্য যেকোনো কিছু!",
);

pub const THANKS: Localized<&str> = Localized::new(
    "You're welcome! Let me know if you need any more information about Md Ridoan Mahmud Zisan.",
    "আপনাকেও ধন্যবাদ! মো. রিদওয়ান মাহমুদ জিসান সম্পর্কে আর কিছু জানতে চাইলে বলবেন।",
);

/// `{age}` is replaced with the computed age.
pub const AGE: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan is {age} years old (born December 31, 2007).",
    "মো. রিদওয়ান মাহমুদ জিসানের বয়স {age} বছর (জন্ম ৩১ ডিসেম্বর, ২০০৭)।",
);

pub const BLOOD_GROUP: Localized<&str> = Localized::new(
    "Md Ridoan Mahmud Zisan's blood group is B+ (B positive).",
    "মো. রিদওয়ান মাহমুদ জিসানের রক্তের গ্রুপ বি+ (বি পজিটিভ)।",
);

pub const FAILURE: Localized<&str> = Localized::new(
    "Sorry, I could not process your request.",
    "দুঃখিত, আপনার অনুরোধটি প্রক্রিয়া করা যায়নি।",
);
